use folio_engine::{
    FolioConfig, FolioRuntime, InputEvent, InputQueue, MediaCollection, ProtocolLayout, Result,
};

/// Wires the headless runtime to the browser frame loop.
///
/// The page keeps one runner in `thread_local!` storage and drives it through
/// the free functions in `lib.rs`, because wasm-bindgen cannot export the
/// runtime's borrow-based API directly.
pub struct FolioRunner {
    runtime: FolioRuntime,
    input: InputQueue,
    layout: ProtocolLayout,
    /// Flat header + event buffer read by JS after each tick.
    buffer: Vec<f32>,
}

impl FolioRunner {
    pub fn new(items: MediaCollection, config: FolioConfig) -> Self {
        let runtime = FolioRuntime::new(items, config);
        let layout = ProtocolLayout::for_runtime(&runtime);
        let mut runner = Self {
            runtime,
            input: InputQueue::new(),
            buffer: Vec::with_capacity(layout.buffer_total_floats),
            layout,
        };
        runner.publish();
        runner
    }

    /// Parse the collection and an optional config from JSON.
    /// An empty config string means defaults.
    pub fn from_json(items_json: &str, config_json: &str) -> Result<Self> {
        let items = MediaCollection::from_json(items_json)?;
        let config = if config_json.trim().is_empty() {
            FolioConfig::default()
        } else {
            FolioConfig::from_json(config_json)?
        };
        Ok(Self::new(items, config))
    }

    /// Replace the certificate deck from a JSON array of
    /// `{ id, title, issuer, image }` objects. The buffer grows or shrinks to
    /// the new card count immediately.
    pub fn load_certificates(&mut self, json: &str) -> Result<()> {
        let certificates = MediaCollection::from_json(json)?;
        self.runtime.set_certificates(certificates);
        self.layout = ProtocolLayout::for_runtime(&self.runtime);
        self.publish();
        Ok(())
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame: apply queued input, step the spring, repack the buffer.
    pub fn tick(&mut self, dt: f32) {
        self.runtime.tick(dt, &mut self.input);
        self.publish();
    }

    fn publish(&mut self) {
        self.layout.pack(&self.runtime, &mut self.buffer);
    }

    pub fn runtime(&self) -> &FolioRuntime {
        &self.runtime
    }

    // ---- Buffer accessors for JS reads ----

    pub fn buffer(&self) -> &[f32] {
        &self.buffer
    }

    pub fn buffer_ptr(&self) -> *const f32 {
        self.buffer.as_ptr()
    }

    pub fn buffer_len(&self) -> u32 {
        self.buffer.len() as u32
    }

    pub fn card_data_offset(&self) -> u32 {
        self.layout.card_data_offset as u32
    }

    pub fn event_data_offset(&self) -> u32 {
        self.layout.event_data_offset as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn scene_transform_css(&self) -> String {
        self.runtime.parallax().transform().css()
    }

    pub fn selected_title(&self) -> Option<String> {
        self.runtime.navigator().selected_item().map(|item| item.title.clone())
    }

    pub fn selected_category(&self) -> Option<String> {
        self.runtime.navigator().selected_item().map(|item| item.category.clone())
    }

    pub fn selected_image(&self) -> Option<String> {
        self.runtime.navigator().selected_item().map(|item| item.image_ref.clone())
    }

    pub fn certificate_title(&self) -> Option<String> {
        self.runtime.certificates().selected_item().map(|cert| cert.title.clone())
    }

    pub fn certificate_issuer(&self) -> Option<String> {
        self.runtime.certificates().selected_item().map(|cert| cert.category.clone())
    }

    pub fn certificate_image(&self) -> Option<String> {
        self.runtime.certificates().selected_item().map(|cert| cert.image_ref.clone())
    }
}
