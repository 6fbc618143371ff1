use glam::Vec2;

use crate::api::config::FolioConfig;
use crate::api::error::FolioError;
use crate::api::types::{Direction, FolioEvent, ItemId};
use crate::core::time::FrameClock;
use crate::gallery::collection::MediaCollection;
use crate::gallery::flip::FlipCard;
use crate::gallery::navigator::Navigator;
use crate::input::queue::{InputEvent, InputQueue, KEY_ESCAPE};
use crate::layout::viewport::{LayoutMode, Viewport};
use crate::parallax::engine::ParallaxEngine;

/// Owns the gallery navigator, the certificate deck, one parallax engine and
/// the viewport they share.
///
/// Input is applied strictly in arrival order, so a resize queued before a
/// gesture is in effect by the time the gesture is seen. Component errors
/// stop here: they are logged and the frame carries on.
#[derive(Debug)]
pub struct FolioRuntime {
    config: FolioConfig,
    navigator: Navigator,
    /// Certificate preview. Select/close only; it never sees gestures.
    certificates: Navigator,
    /// One flip card per certificate, same order.
    cards: Vec<FlipCard>,
    parallax: ParallaxEngine,
    viewport: Viewport,
    clock: FrameClock,
    /// Change notifications produced since the start of the current tick.
    events: Vec<FolioEvent>,
}

impl FolioRuntime {
    pub fn new(items: MediaCollection, config: FolioConfig) -> Self {
        Self {
            navigator: Navigator::new(items, &config),
            certificates: Navigator::new(MediaCollection::default(), &config),
            cards: Vec::new(),
            parallax: ParallaxEngine::new(&config),
            viewport: Viewport::new(config.compact_breakpoint),
            clock: FrameClock::new(config.max_frame_dt),
            events: Vec::with_capacity(config.max_events),
            config,
        }
    }

    /// Replace the certificate deck. Any open preview is closed and every
    /// card shows its front.
    pub fn set_certificates(&mut self, certificates: MediaCollection) {
        self.cards = vec![FlipCard::new(); certificates.len()];
        self.certificates = Navigator::new(certificates, &self.config);
    }

    /// Run one frame: drain and apply queued input, then advance the spring.
    pub fn tick(&mut self, dt: f32, input: &mut InputQueue) {
        self.events.clear();
        for event in input.drain() {
            self.handle(event);
        }
        let dt = self.clock.advance(dt);
        self.parallax.step(dt);
    }

    /// Apply a single input event immediately.
    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::Resize { width } => {
                if let Some(mode) = self.viewport.resize(width) {
                    self.apply_layout(mode);
                }
            }
            InputEvent::ScenePointerMove { x, y, bounds } => {
                if let Err(err) = self.parallax.on_pointer_move(Vec2::new(x, y), bounds) {
                    self.recover(err);
                }
            }
            InputEvent::ScenePointerLeave => self.parallax.on_pointer_leave(),
            InputEvent::GestureStart => self.navigator.on_gesture_start(),
            InputEvent::GestureMove { dx } => self.navigator.on_gesture_move(dx),
            InputEvent::GestureEnd { dx } => {
                if let Some((direction, id)) = self.navigator.on_gesture_end(dx) {
                    self.emit(FolioEvent::swipe_navigated(id, direction));
                    self.emit(FolioEvent::selection_changed(id));
                }
            }
            InputEvent::GestureCancel => self.navigator.on_gesture_cancel(),
            InputEvent::Select { id } => match self.navigator.select(id) {
                Ok(()) => self.emit(FolioEvent::selection_changed(id)),
                Err(err) => self.recover(err),
            },
            InputEvent::Next => self.step(Direction::Next),
            InputEvent::Previous => self.step(Direction::Previous),
            InputEvent::Close | InputEvent::BackdropClick => self.close(),
            InputEvent::KeyDown { key_code } => {
                if key_code == KEY_ESCAPE {
                    self.close();
                }
            }
            InputEvent::ExpandVisible => {
                if self.navigator.expand_visible() {
                    let count = self.navigator.visible_count();
                    self.emit(FolioEvent::visible_expanded(count));
                }
            }
            InputEvent::CardEnter { index } => self.flip(index, FlipCard::on_pointer_enter),
            InputEvent::CardLeave { index } => self.flip(index, FlipCard::on_pointer_leave),
            InputEvent::CardClick { index } => self.flip(index, FlipCard::on_click),
            InputEvent::CertificatePreview { id } => self.preview(id),
            InputEvent::CertificateClose => {
                if self.certificates.is_open() {
                    self.certificates.close();
                    self.emit(FolioEvent::certificate_closed());
                }
            }
        }
    }

    fn flip(&mut self, index: usize, action: fn(&mut FlipCard)) {
        let count = self.cards.len();
        let Some(card) = self.cards.get_mut(index) else {
            self.recover(FolioError::NoSuchCard { index, count });
            return;
        };
        let before = card.is_flipped();
        action(card);
        let after = card.is_flipped();
        if before != after {
            self.emit(FolioEvent::card_flipped(index, after));
        }
    }

    fn preview(&mut self, id: ItemId) {
        if self.certificates.selected_id() == Some(id) {
            return;
        }
        match self.certificates.select(id) {
            Ok(()) => self.emit(FolioEvent::certificate_opened(id)),
            Err(err) => self.recover(err),
        }
    }

    fn step(&mut self, direction: Direction) {
        match self.navigator.navigate(direction) {
            Ok(id) => self.emit(FolioEvent::selection_changed(id)),
            Err(err) => self.recover(err),
        }
    }

    fn close(&mut self) {
        if self.navigator.is_open() {
            self.navigator.close();
            self.emit(FolioEvent::lightbox_closed());
        }
    }

    fn apply_layout(&mut self, mode: LayoutMode) {
        log::debug!("layout -> {:?} at width {}", mode, self.viewport.width());
        self.navigator.set_swipe_enabled(mode.is_compact());
        self.parallax.set_layout_mode(mode);
        self.emit(FolioEvent::layout_changed(mode.is_compact()));
    }

    fn recover(&self, err: FolioError) {
        match err {
            FolioError::InvalidState => log::trace!("ignored: {}", err),
            _ => log::warn!("ignored: {}", err),
        }
    }

    fn emit(&mut self, event: FolioEvent) {
        if self.events.len() < self.config.max_events {
            self.events.push(event);
        } else {
            log::warn!("event buffer full, dropping kind {}", event.kind);
        }
    }

    // -- Accessors --

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn certificates(&self) -> &Navigator {
        &self.certificates
    }

    pub fn cards(&self) -> &[FlipCard] {
        &self.cards
    }

    pub fn parallax(&self) -> &ParallaxEngine {
        &self.parallax
    }

    pub fn mode(&self) -> LayoutMode {
        self.viewport.mode()
    }

    pub fn events(&self) -> &[FolioEvent] {
        &self.events
    }

    pub fn frame(&self) -> u64 {
        self.clock.frame()
    }

    pub fn config(&self) -> &FolioConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::ItemId;
    use crate::gallery::collection::MediaItem;
    use crate::layout::viewport::Bounds;

    const DT: f32 = 1.0 / 60.0;

    fn runtime(n: u32) -> FolioRuntime {
        let items = MediaCollection::new(
            (1..=n).map(|i| MediaItem::new(i, format!("item {i}"), "Design", format!("{i}.jpg"))).collect(),
        )
        .unwrap();
        FolioRuntime::new(items, FolioConfig::default())
    }

    fn with_certificates(rt: &mut FolioRuntime) {
        rt.set_certificates(
            MediaCollection::new(vec![
                MediaItem::new(1, "Cybersecurity Specialization", "Coursera", "coursera.jpeg"),
                MediaItem::new(2, "Python Programming", "Infosys Springboard", "python.jpg"),
            ])
            .unwrap(),
        );
    }

    fn tick(rt: &mut FolioRuntime, events: &[InputEvent]) {
        let mut q = InputQueue::new();
        for e in events {
            q.push(*e);
        }
        rt.tick(DT, &mut q);
    }

    #[test]
    fn buttons_navigate_and_escape_closes() {
        let mut rt = runtime(3);
        tick(&mut rt, &[InputEvent::Select { id: ItemId(2) }, InputEvent::Next, InputEvent::Next]);
        assert_eq!(rt.navigator().selected_id(), Some(ItemId(1)));
        assert_eq!(rt.events().len(), 3);

        tick(&mut rt, &[InputEvent::KeyDown { key_code: KEY_ESCAPE }]);
        assert_eq!(rt.navigator().selected_id(), None);
        assert_eq!(rt.events(), &[FolioEvent::lightbox_closed()]);
    }

    #[test]
    fn close_twice_emits_once() {
        let mut rt = runtime(3);
        tick(&mut rt, &[InputEvent::Select { id: ItemId(1) }]);
        tick(&mut rt, &[InputEvent::BackdropClick, InputEvent::Close]);
        assert_eq!(rt.navigator().selected_id(), None);
        assert_eq!(rt.events().len(), 1);
    }

    #[test]
    fn navigation_while_closed_is_silent() {
        let mut rt = runtime(3);
        tick(&mut rt, &[InputEvent::Next, InputEvent::Previous, InputEvent::Select { id: ItemId(99) }]);
        assert_eq!(rt.navigator().selected_id(), None);
        assert!(rt.events().is_empty());
    }

    #[test]
    fn other_keys_do_nothing() {
        let mut rt = runtime(3);
        tick(&mut rt, &[InputEvent::Select { id: ItemId(1) }, InputEvent::KeyDown { key_code: 13 }]);
        assert!(rt.navigator().is_open());
    }

    #[test]
    fn swipe_requires_compact_layout() {
        let mut rt = runtime(3);
        let swipe = [
            InputEvent::GestureStart,
            InputEvent::GestureMove { dx: -80.0 },
            InputEvent::GestureEnd { dx: -80.0 },
        ];
        tick(&mut rt, &[InputEvent::Resize { width: 1280.0 }, InputEvent::Select { id: ItemId(2) }]);
        tick(&mut rt, &swipe);
        assert_eq!(rt.navigator().selected_id(), Some(ItemId(2)));

        tick(&mut rt, &[InputEvent::Resize { width: 390.0 }]);
        assert!(rt.mode().is_compact());
        tick(&mut rt, &swipe);
        assert_eq!(rt.navigator().selected_id(), Some(ItemId(3)));
        assert_eq!(rt.navigator().drag_offset(), 0.0);
        assert_eq!(
            rt.events(),
            &[
                FolioEvent::swipe_navigated(ItemId(3), Direction::Next),
                FolioEvent::selection_changed(ItemId(3)),
            ]
        );
    }

    #[test]
    fn resize_is_applied_before_following_gesture() {
        let mut rt = runtime(3);
        tick(
            &mut rt,
            &[
                InputEvent::Select { id: ItemId(2) },
                InputEvent::Resize { width: 600.0 },
                InputEvent::GestureStart,
                InputEvent::GestureEnd { dx: 90.0 },
            ],
        );
        assert_eq!(rt.navigator().selected_id(), Some(ItemId(1)));
    }

    #[test]
    fn widening_mid_gesture_cancels_it() {
        let mut rt = runtime(3);
        tick(&mut rt, &[InputEvent::Resize { width: 400.0 }, InputEvent::Select { id: ItemId(2) }]);
        tick(&mut rt, &[InputEvent::GestureStart, InputEvent::GestureMove { dx: 120.0 }]);
        assert_eq!(rt.navigator().drag_offset(), 120.0);

        tick(&mut rt, &[InputEvent::Resize { width: 1024.0 }, InputEvent::GestureEnd { dx: 120.0 }]);
        assert_eq!(rt.navigator().drag_offset(), 0.0);
        assert_eq!(rt.navigator().selected_id(), Some(ItemId(2)));
    }

    #[test]
    fn abandoned_gesture_resets_offset() {
        let mut rt = runtime(3);
        tick(&mut rt, &[InputEvent::Resize { width: 400.0 }, InputEvent::Select { id: ItemId(2) }]);
        tick(&mut rt, &[InputEvent::GestureStart, InputEvent::GestureMove { dx: 120.0 }, InputEvent::GestureCancel]);
        assert_eq!(rt.navigator().drag_offset(), 0.0);
        assert_eq!(rt.navigator().selected_id(), Some(ItemId(2)));
    }

    #[test]
    fn expand_emits_once() {
        let mut rt = runtime(9);
        tick(&mut rt, &[InputEvent::ExpandVisible, InputEvent::ExpandVisible]);
        assert_eq!(rt.navigator().visible_count(), 9);
        assert_eq!(rt.events(), &[FolioEvent::visible_expanded(9)]);
    }

    #[test]
    fn pointer_drives_scene_over_frames() {
        let mut rt = runtime(1);
        let bounds = Bounds::new(0.0, 0.0, 1000.0, 600.0);
        tick(&mut rt, &[InputEvent::ScenePointerMove { x: 1000.0, y: 300.0, bounds }]);
        let yaw = rt.parallax().current_angles().y;
        assert!(yaw > 5.0 && yaw < 6.5, "yaw {}", yaw);

        for _ in 0..180 {
            tick(&mut rt, &[]);
        }
        assert!(rt.parallax().is_settled());
        assert!((rt.parallax().current_angles().y - 6.5).abs() < 0.01);
    }

    #[test]
    fn degenerate_bounds_do_not_poison_angles() {
        let mut rt = runtime(1);
        let bounds = Bounds::new(0.0, 0.0, 0.0, 0.0);
        tick(&mut rt, &[InputEvent::ScenePointerMove { x: 5.0, y: 5.0, bounds }]);
        let a = rt.parallax().current_angles();
        assert!(a.is_finite());
        assert_eq!(a, Vec2::new(-12.0, 5.0));
    }

    #[test]
    fn long_pause_is_clamped() {
        let mut rt = runtime(1);
        let bounds = Bounds::new(0.0, 0.0, 1000.0, 600.0);
        let mut q = InputQueue::new();
        q.push(InputEvent::ScenePointerMove { x: 1000.0, y: 300.0, bounds });
        rt.tick(600.0, &mut q);
        // one clamped step, not a ten-minute leap onto the target
        assert!(!rt.parallax().is_settled());
    }

    #[test]
    fn compact_layout_changes_scene() {
        let mut rt = runtime(1);
        tick(&mut rt, &[InputEvent::Resize { width: 375.0 }]);
        assert_eq!(rt.events(), &[FolioEvent::layout_changed(true)]);
        assert_eq!(rt.parallax().transform().scale, 0.18);
    }

    #[test]
    fn events_past_the_cap_are_dropped() {
        let items = MediaCollection::new(vec![
            MediaItem::new(1, "a", "Design", "a.jpg"),
            MediaItem::new(2, "b", "Design", "b.jpg"),
        ])
        .unwrap();
        let config = FolioConfig { max_events: 1, ..FolioConfig::default() };
        let mut rt = FolioRuntime::new(items, config);
        tick(&mut rt, &[InputEvent::Select { id: ItemId(1) }, InputEvent::Next]);
        assert_eq!(rt.navigator().selected_id(), Some(ItemId(2)));
        assert_eq!(rt.events(), &[FolioEvent::selection_changed(ItemId(1))]);
    }

    #[test]
    fn cards_flip_on_hover_and_click() {
        let mut rt = runtime(1);
        with_certificates(&mut rt);
        assert_eq!(rt.cards().len(), 2);

        tick(&mut rt, &[InputEvent::CardEnter { index: 1 }]);
        assert!(rt.cards()[1].is_flipped());
        assert!(!rt.cards()[0].is_flipped());
        assert_eq!(rt.events(), &[FolioEvent::card_flipped(1, true)]);

        // a tap while hovered toggles back; leaving afterwards changes nothing
        tick(&mut rt, &[InputEvent::CardClick { index: 1 }, InputEvent::CardLeave { index: 1 }]);
        assert!(!rt.cards()[1].is_flipped());
        assert_eq!(rt.events(), &[FolioEvent::card_flipped(1, false)]);
    }

    #[test]
    fn unknown_card_is_ignored() {
        let mut rt = runtime(1);
        with_certificates(&mut rt);
        tick(&mut rt, &[InputEvent::CardClick { index: 7 }]);
        assert!(rt.cards().iter().all(|c| !c.is_flipped()));
        assert!(rt.events().is_empty());
    }

    #[test]
    fn certificate_preview_is_independent_of_lightbox() {
        let mut rt = runtime(3);
        with_certificates(&mut rt);
        tick(&mut rt, &[InputEvent::Select { id: ItemId(3) }, InputEvent::CertificatePreview { id: ItemId(2) }]);
        assert_eq!(rt.navigator().selected_id(), Some(ItemId(3)));
        assert_eq!(rt.certificates().selected_id(), Some(ItemId(2)));
        assert_eq!(rt.certificates().selected_item().map(|c| c.category.as_str()), Some("Infosys Springboard"));

        tick(&mut rt, &[InputEvent::CertificateClose, InputEvent::CertificateClose]);
        assert!(!rt.certificates().is_open());
        assert!(rt.navigator().is_open());
        assert_eq!(rt.events(), &[FolioEvent::certificate_closed()]);
    }

    #[test]
    fn certificate_preview_ignores_gestures_and_unknown_ids() {
        let mut rt = runtime(3);
        with_certificates(&mut rt);
        tick(&mut rt, &[InputEvent::Resize { width: 390.0 }, InputEvent::CertificatePreview { id: ItemId(9) }]);
        assert!(!rt.certificates().is_open());

        tick(
            &mut rt,
            &[
                InputEvent::CertificatePreview { id: ItemId(1) },
                InputEvent::GestureStart,
                InputEvent::GestureEnd { dx: -120.0 },
            ],
        );
        assert_eq!(rt.certificates().selected_id(), Some(ItemId(1)));
        assert_eq!(rt.events(), &[FolioEvent::certificate_opened(ItemId(1))]);
    }

    #[test]
    fn replacing_certificates_resets_deck() {
        let mut rt = runtime(1);
        with_certificates(&mut rt);
        tick(&mut rt, &[InputEvent::CardEnter { index: 0 }, InputEvent::CertificatePreview { id: ItemId(1) }]);
        with_certificates(&mut rt);
        assert!(!rt.cards()[0].is_flipped());
        assert!(!rt.certificates().is_open());
    }
}
