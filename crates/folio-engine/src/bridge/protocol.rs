/// Flat f32 buffer shared with the JavaScript view layer.
/// Must stay in sync with the JS `protocol.ts`.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Header: 16 floats]
/// [Cards: card_count floats, 1.0 = back showing]
/// [Events: max_events × 4 floats]
/// ```
///
/// The header is rewritten every frame. Optional values use -1 for "none",
/// booleans are 0.0 / 1.0. Ids are capped at `ItemId::MAX` so they stay
/// exact; the frame counter stops being exact after 2^24 frames (about three
/// days at 60 Hz) and is only meant for change detection.

use crate::api::runtime::FolioRuntime;
use crate::api::types::FolioEvent;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_PROTOCOL_VERSION: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_SELECTED_ID: usize = 2;
pub const HEADER_SELECTED_INDEX: usize = 3;
pub const HEADER_DRAG_OFFSET: usize = 4;
pub const HEADER_DRAGGING: usize = 5;
pub const HEADER_VISIBLE_COUNT: usize = 6;
pub const HEADER_ITEM_COUNT: usize = 7;
pub const HEADER_PITCH: usize = 8;
pub const HEADER_YAW: usize = 9;
pub const HEADER_SCALE: usize = 10;
pub const HEADER_COMPACT: usize = 11;
pub const HEADER_MAX_EVENTS: usize = 12;
pub const HEADER_EVENT_COUNT: usize = 13;
pub const HEADER_CERTIFICATE_ID: usize = 14;
pub const HEADER_CARD_COUNT: usize = 15;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 2.0;

/// Floats per event: kind, a, b, c (wire format — never changes).
pub const EVENT_FLOATS: usize = FolioEvent::FLOATS;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    /// Certificate cards in the deck.
    pub card_count: usize,
    /// Offset (in floats) where card faces begin.
    pub card_data_offset: usize,
    /// Maximum events per frame.
    pub max_events: usize,
    /// Size of event data section in floats.
    pub event_data_floats: usize,
    /// Offset (in floats) where event data begins.
    pub event_data_offset: usize,
    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    pub fn new(max_events: usize, card_count: usize) -> Self {
        let card_data_offset = HEADER_FLOATS;
        let event_data_floats = max_events * EVENT_FLOATS;
        let event_data_offset = card_data_offset + card_count;
        let buffer_total_floats = event_data_offset + event_data_floats;
        Self {
            card_count,
            card_data_offset,
            max_events,
            event_data_floats,
            event_data_offset,
            buffer_total_floats,
            buffer_total_bytes: buffer_total_floats * 4,
        }
    }

    /// Layout sized for the runtime's event cap and certificate deck.
    pub fn for_runtime(runtime: &FolioRuntime) -> Self {
        Self::new(runtime.config().max_events, runtime.cards().len())
    }

    /// Write the runtime's current state into `out`, resizing it to the layout.
    /// Events beyond `max_events` and cards beyond `card_count` are not written.
    pub fn pack(&self, runtime: &FolioRuntime, out: &mut Vec<f32>) {
        out.clear();
        out.resize(self.buffer_total_floats, 0.0);

        let nav = runtime.navigator();
        let transform = runtime.parallax().transform();
        let events = runtime.events();
        let event_count = events.len().min(self.max_events);

        out[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        out[HEADER_FRAME_COUNTER] = runtime.frame() as f32;
        out[HEADER_SELECTED_ID] = nav.selected_id().map_or(-1.0, |id| id.0 as f32);
        out[HEADER_SELECTED_INDEX] = nav.selected_index().map_or(-1.0, |i| i as f32);
        out[HEADER_DRAG_OFFSET] = nav.drag_offset();
        out[HEADER_DRAGGING] = flag(nav.is_dragging());
        out[HEADER_VISIBLE_COUNT] = nav.visible_count() as f32;
        out[HEADER_ITEM_COUNT] = nav.items().len() as f32;
        out[HEADER_PITCH] = transform.pitch;
        out[HEADER_YAW] = transform.yaw;
        out[HEADER_SCALE] = transform.scale;
        out[HEADER_COMPACT] = flag(runtime.mode().is_compact());
        out[HEADER_MAX_EVENTS] = self.max_events as f32;
        out[HEADER_EVENT_COUNT] = event_count as f32;
        out[HEADER_CERTIFICATE_ID] = runtime.certificates().selected_id().map_or(-1.0, |id| id.0 as f32);
        out[HEADER_CARD_COUNT] = self.card_count as f32;

        let faces = &mut out[self.card_data_offset..self.event_data_offset];
        for (slot, card) in faces.iter_mut().zip(runtime.cards()) {
            *slot = flag(card.is_flipped());
        }

        let floats: &[f32] = bytemuck::cast_slice(&events[..event_count]);
        out[self.event_data_offset..self.event_data_offset + floats.len()].copy_from_slice(floats);
    }
}

fn flag(value: bool) -> f32 {
    if value { 1.0 } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::config::FolioConfig;
    use crate::api::types::ItemId;
    use crate::gallery::collection::{MediaCollection, MediaItem};
    use crate::input::queue::{InputEvent, InputQueue};

    fn runtime() -> FolioRuntime {
        let items = MediaCollection::new(vec![
            MediaItem::new(10, "A", "Web", "a.jpg"),
            MediaItem::new(20, "B", "Web", "b.jpg"),
        ])
        .unwrap();
        FolioRuntime::new(items, FolioConfig::default())
    }

    #[test]
    fn default_layout_sizes() {
        let layout = ProtocolLayout::for_runtime(&runtime());
        assert_eq!(layout.max_events, 32);
        assert_eq!(layout.card_count, 0);
        assert_eq!(layout.event_data_offset, HEADER_FLOATS);
        assert_eq!(layout.event_data_floats, 32 * 4);
        assert_eq!(layout.buffer_total_floats, HEADER_FLOATS + 32 * 4);
        assert_eq!(layout.buffer_total_bytes, layout.buffer_total_floats * 4);
    }

    #[test]
    fn closed_lightbox_header() {
        let rt = runtime();
        let layout = ProtocolLayout::new(4, 0);
        let mut buf = Vec::new();
        layout.pack(&rt, &mut buf);

        assert_eq!(buf.len(), layout.buffer_total_floats);
        assert_eq!(buf[HEADER_PROTOCOL_VERSION], PROTOCOL_VERSION);
        assert_eq!(buf[HEADER_SELECTED_ID], -1.0);
        assert_eq!(buf[HEADER_SELECTED_INDEX], -1.0);
        assert_eq!(buf[HEADER_VISIBLE_COUNT], 2.0);
        assert_eq!(buf[HEADER_ITEM_COUNT], 2.0);
        assert_eq!(buf[HEADER_PITCH], -12.0);
        assert_eq!(buf[HEADER_YAW], 5.0);
        assert_eq!(buf[HEADER_SCALE], 1.0);
        assert_eq!(buf[HEADER_COMPACT], 0.0);
        assert_eq!(buf[HEADER_EVENT_COUNT], 0.0);
        assert_eq!(buf[HEADER_CERTIFICATE_ID], -1.0);
        assert_eq!(buf[HEADER_CARD_COUNT], 0.0);
    }

    #[test]
    fn events_follow_header() {
        let mut rt = runtime();
        let mut input = InputQueue::new();
        input.push(InputEvent::Select { id: ItemId(20) });
        rt.tick(1.0 / 60.0, &mut input);

        let layout = ProtocolLayout::new(4, 0);
        let mut buf = Vec::new();
        layout.pack(&rt, &mut buf);

        assert_eq!(buf[HEADER_SELECTED_ID], 20.0);
        assert_eq!(buf[HEADER_SELECTED_INDEX], 1.0);
        assert_eq!(buf[HEADER_FRAME_COUNTER], 1.0);
        assert_eq!(buf[HEADER_EVENT_COUNT], 1.0);
        let o = layout.event_data_offset;
        assert_eq!(buf[o], FolioEvent::SELECTION_CHANGED);
        assert_eq!(buf[o + 1], 20.0);
    }

    #[test]
    fn events_past_capacity_are_dropped() {
        let mut rt = runtime();
        let mut input = InputQueue::new();
        input.push(InputEvent::Select { id: ItemId(10) });
        input.push(InputEvent::Next);
        input.push(InputEvent::Next);
        rt.tick(1.0 / 60.0, &mut input);
        assert_eq!(rt.events().len(), 3);

        let layout = ProtocolLayout::new(2, 0);
        let mut buf = Vec::new();
        layout.pack(&rt, &mut buf);
        assert_eq!(buf.len(), HEADER_FLOATS + 2 * EVENT_FLOATS);
        assert_eq!(buf[HEADER_EVENT_COUNT], 2.0);
    }

    #[test]
    fn card_faces_sit_between_header_and_events() {
        let mut rt = runtime();
        rt.set_certificates(
            MediaCollection::new(vec![
                MediaItem::new(1, "Cert A", "Coursera", "a.jpg"),
                MediaItem::new(2, "Cert B", "ExcelR", "b.jpg"),
                MediaItem::new(3, "Cert C", "Palo Alto", "c.jpg"),
            ])
            .unwrap(),
        );
        let mut input = InputQueue::new();
        input.push(InputEvent::CardEnter { index: 2 });
        input.push(InputEvent::CertificatePreview { id: ItemId(2) });
        rt.tick(1.0 / 60.0, &mut input);

        let layout = ProtocolLayout::for_runtime(&rt);
        assert_eq!(layout.card_data_offset, HEADER_FLOATS);
        assert_eq!(layout.event_data_offset, HEADER_FLOATS + 3);
        let mut buf = Vec::new();
        layout.pack(&rt, &mut buf);

        assert_eq!(buf.len(), HEADER_FLOATS + 3 + 32 * EVENT_FLOATS);
        assert_eq!(buf[HEADER_CERTIFICATE_ID], 2.0);
        assert_eq!(buf[HEADER_CARD_COUNT], 3.0);
        assert_eq!(&buf[HEADER_FLOATS..HEADER_FLOATS + 3], &[0.0, 0.0, 1.0]);
        let o = layout.event_data_offset;
        assert_eq!(buf[o], FolioEvent::CARD_FLIPPED);
        assert_eq!(buf[o + 1], 2.0);
        assert_eq!(buf[o + 4], FolioEvent::CERTIFICATE_OPENED);
    }
}
