use crate::fields::{Address, FieldTag, FieldValue, SymbolTables, decode_field};
use crate::source::{NodeEvent, NodeKind};
use crate::{DecodedField, DeviceRecord};

use super::registry::AddressRegistry;

/// Coarse position of the traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    InElement,
    InText,
}

/// Traversal state threaded through one document scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalState {
    pub phase: Phase,
    pub depth: usize,
    /// Most recent tag attribute seen; selects the decoder for text.
    pub active_tag: Option<String>,
    /// Depth of the element that set `active_tag`.
    pub tag_depth: usize,
}

impl Default for TraversalState {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            depth: 0,
            active_tag: None,
            tag_depth: 0,
        }
    }
}

/// Everything a finished scan produced.
#[derive(Debug)]
pub struct ScanOutcome {
    pub loose_fields: Vec<DecodedField>,
    pub records: Vec<DeviceRecord>,
    pub registry: AddressRegistry,
}

/// Tag-dispatch state machine; lives for exactly one document scan.
///
/// # Examples
/// ```
/// use btconfig_core::{Dispatcher, FieldTag, NodeEvent, SymbolTables};
///
/// let mut dispatcher = Dispatcher::new(SymbolTables::default(), 2);
/// dispatcher.dispatch(NodeEvent::element(2, Some("00:1A:7D:DA:71:13")));
/// dispatcher.dispatch(NodeEvent::element(3, Some("Timestamp")));
/// let kind = dispatcher.dispatch(NodeEvent::text(4, "1411720960"));
/// assert_eq!(kind, Some(FieldTag::Timestamp));
///
/// let outcome = dispatcher.finish();
/// assert_eq!(outcome.records.len(), 1);
/// assert_eq!(outcome.registry.dump_all().len(), 1);
/// ```
pub struct Dispatcher<'t> {
    tables: SymbolTables<'t>,
    record_depth: usize,
    state: TraversalState,
    registry: AddressRegistry,
    loose_fields: Vec<DecodedField>,
    records: Vec<DeviceRecord>,
}

impl<'t> Dispatcher<'t> {
    pub fn new(tables: SymbolTables<'t>, record_depth: usize) -> Self {
        Self {
            tables,
            record_depth,
            state: TraversalState::default(),
            registry: AddressRegistry::new(),
            loose_fields: Vec::new(),
            records: Vec::new(),
        }
    }

    pub fn state(&self) -> &TraversalState {
        &self.state
    }

    pub fn registry(&self) -> &AddressRegistry {
        &self.registry
    }

    /// Consume one node event.
    ///
    /// Returns the field kind used when the event was a decoded text payload.
    pub fn dispatch(&mut self, event: NodeEvent) -> Option<FieldTag> {
        match event.kind {
            NodeKind::ElementStart { tag } => {
                self.on_element(event.depth, tag);
                None
            }
            NodeKind::Text { payload } => Some(self.on_text(event.depth, &payload)),
            NodeKind::Other => None,
        }
    }

    pub fn finish(self) -> ScanOutcome {
        ScanOutcome {
            loose_fields: self.loose_fields,
            records: self.records,
            registry: self.registry,
        }
    }

    fn on_element(&mut self, depth: usize, tag: Option<String>) {
        self.state.phase = Phase::InElement;
        self.state.depth = depth;

        let address = tag.as_deref().and_then(Address::parse);
        if let Some(address) = address {
            self.registry.register(address);
        }

        if depth == self.record_depth {
            tracing::debug!(tag = tag.as_deref().unwrap_or(""), "device record");
            self.records.push(DeviceRecord {
                tag: tag.clone(),
                depth,
                address,
                fields: Vec::new(),
            });
        }

        if let Some(tag) = tag {
            self.state.active_tag = Some(tag);
            self.state.tag_depth = depth;
        }
    }

    fn on_text(&mut self, depth: usize, payload: &str) -> FieldTag {
        self.state.phase = Phase::InText;
        self.state.depth = depth;

        let active = self.state.active_tag.as_deref().unwrap_or("");
        let kind = FieldTag::classify(active);
        let value = decode_field(kind, payload, &self.tables);
        tracing::trace!(tag = active, ?kind, "decoded field");

        if let FieldValue::Address {
            address: Some(address),
            ..
        } = &value
        {
            self.registry.register(*address);
            self.registry.note_local_adapter(*address);
        }

        let field = DecodedField {
            tag: active.to_string(),
            depth: self.state.tag_depth,
            value,
        };
        // Loose fields only precede the first record, keeping document order.
        match self.records.last_mut() {
            Some(record) => record.fields.push(field),
            None => self.loose_fields.push(field),
        }
        kind
    }
}

#[cfg(test)]
mod tests {
    use super::{Dispatcher, Phase};
    use crate::fields::{Address, Decoded, FieldTag, FieldValue, SymbolTables};
    use crate::source::NodeEvent;

    fn dispatcher() -> Dispatcher<'static> {
        Dispatcher::new(SymbolTables::default(), 2)
    }

    fn addr(text: &str) -> Address {
        text.parse().unwrap()
    }

    #[test]
    fn earliest_marker_selects_decoder() {
        let mut d = dispatcher();
        d.dispatch(NodeEvent::element(3, Some("ServiceAndDevClass")));
        let kind = d.dispatch(NodeEvent::text(4, "1101-x"));
        assert_eq!(kind, Some(FieldTag::Service));
    }

    #[test]
    fn element_tag_replaces_active_tag() {
        let mut d = dispatcher();
        d.dispatch(NodeEvent::element(3, Some("Name")));
        assert_eq!(d.state().active_tag.as_deref(), Some("Name"));
        assert_eq!(d.state().phase, Phase::InElement);
        d.dispatch(NodeEvent::element(3, None));
        assert_eq!(d.state().active_tag.as_deref(), Some("Name"));
        d.dispatch(NodeEvent::text(4, "x"));
        assert_eq!(d.state().phase, Phase::InText);
    }

    #[test]
    fn other_events_do_not_change_state() {
        let mut d = dispatcher();
        d.dispatch(NodeEvent::element(3, Some("DevClass")));
        let before = d.state().clone();
        assert_eq!(d.dispatch(NodeEvent::other(0)), None);
        assert_eq!(d.state(), &before);
    }

    #[test]
    fn text_without_tag_is_plain() {
        let mut d = dispatcher();
        assert_eq!(d.dispatch(NodeEvent::text(1, "hello")), Some(FieldTag::PlainText));
        let outcome = d.finish();
        assert_eq!(outcome.loose_fields.len(), 1);
        assert_eq!(outcome.loose_fields[0].tag, "");
    }

    #[test]
    fn element_named_by_address_is_registered() {
        let mut d = dispatcher();
        d.dispatch(NodeEvent::element(2, Some("00:1a:7d:da:71:13")));
        d.dispatch(NodeEvent::element(2, Some("Adapter")));
        let outcome = d.finish();
        assert_eq!(outcome.registry.dump_all(), &[addr("00:1A:7D:DA:71:13")]);
        assert_eq!(outcome.records.len(), 2);
        assert_eq!(outcome.records[0].address, Some(addr("00:1A:7D:DA:71:13")));
        assert_eq!(outcome.records[1].address, None);
    }

    #[test]
    fn address_field_sets_local_adapter() {
        let mut d = dispatcher();
        d.dispatch(NodeEvent::element(2, Some("Adapter")));
        d.dispatch(NodeEvent::element(3, Some("Address")));
        d.dispatch(NodeEvent::text(4, "22:22:cc:31:2d:b5"));
        assert_eq!(d.registry().local_adapter(), Some(addr("22:22:CC:31:2D:B5")));
        d.dispatch(NodeEvent::element(3, Some("Address")));
        d.dispatch(NodeEvent::text(4, "not-an-address"));
        let outcome = d.finish();
        assert_eq!(outcome.registry.dump_all().len(), 1);
        assert_eq!(outcome.records[0].fields.len(), 2);
    }

    #[test]
    fn malformed_address_leaves_registry_untouched() {
        let mut d = dispatcher();
        d.dispatch(NodeEvent::element(2, Some("aa:bb:cc:dd:ee")));
        d.dispatch(NodeEvent::element(3, Some("Address")));
        d.dispatch(NodeEvent::text(4, "zz:bb:cc:dd:ee:ff"));
        assert!(d.registry().is_empty());
        assert_eq!(d.registry().local_adapter(), None);
    }

    #[test]
    fn fields_attach_to_current_record() {
        let mut d = dispatcher();
        d.dispatch(NodeEvent::element(0, Some("Bluedroid")));
        d.dispatch(NodeEvent::element(1, Some("Remote")));
        d.dispatch(NodeEvent::element(2, Some("aa:bb:cc:dd:ee:01")));
        d.dispatch(NodeEvent::element(3, Some("DevClass")));
        d.dispatch(NodeEvent::text(4, "2360324"));
        d.dispatch(NodeEvent::element(2, Some("aa:bb:cc:dd:ee:02")));
        d.dispatch(NodeEvent::element(3, Some("DevClass")));
        d.dispatch(NodeEvent::text(4, "bogus"));
        let outcome = d.finish();
        assert_eq!(outcome.records.len(), 2);
        let first = &outcome.records[0].fields[0];
        assert_eq!(first.depth, 3);
        match &first.value {
            FieldValue::DeviceClass(class) => assert_eq!(class.value, Decoded::Parsed(2_360_324)),
            other => panic!("unexpected value {other:?}"),
        }
        match &outcome.records[1].fields[0].value {
            FieldValue::DeviceClass(class) => assert_eq!(class.value, Decoded::Defaulted(0)),
            other => panic!("unexpected value {other:?}"),
        }
    }

    #[test]
    fn text_after_first_record_stays_in_document_order() {
        let mut d = dispatcher();
        d.dispatch(NodeEvent::element(1, Some("Remote")));
        d.dispatch(NodeEvent::text(2, "before"));
        d.dispatch(NodeEvent::element(2, Some("aa:bb:cc:dd:ee:01")));
        d.dispatch(NodeEvent::element(1, Some("Trailer")));
        d.dispatch(NodeEvent::text(2, "after"));
        let outcome = d.finish();
        assert_eq!(outcome.loose_fields.len(), 1);
        assert_eq!(outcome.records[0].fields.len(), 1);
        assert_eq!(outcome.records[0].fields[0].tag, "Trailer");
    }

    #[test]
    fn payloads_reach_decoders_untrimmed() {
        let mut d = dispatcher();
        d.dispatch(NodeEvent::element(2, Some("00:11:22:33:44:55")));
        d.dispatch(NodeEvent::element(3, Some("GattAttrs")));
        d.dispatch(NodeEvent::text(4, "0001 0005 "));
        d.dispatch(NodeEvent::element(3, Some("Name")));
        d.dispatch(NodeEvent::text(4, "  Mic  "));
        let outcome = d.finish();
        let fields = &outcome.records[0].fields;
        assert_eq!(
            fields[0].value,
            FieldValue::GattAttributes {
                tokens: vec!["0001".into(), "0005".into(), "".into()]
            }
        );
        assert_eq!(
            fields[1].value,
            FieldValue::Text {
                raw: "  Mic  ".to_string()
            }
        );
    }

    #[test]
    fn padded_tag_is_not_an_address() {
        let mut d = dispatcher();
        d.dispatch(NodeEvent::element(2, Some(" aa:bb:cc:dd:ee:ff")));
        let outcome = d.finish();
        assert!(outcome.registry.is_empty());
        assert_eq!(outcome.records[0].address, None);
    }

    #[test]
    fn duplicate_record_addresses_conflict() {
        let mut d = dispatcher();
        d.dispatch(NodeEvent::element(2, Some("AA:BB:CC:DD:EE:FF")));
        d.dispatch(NodeEvent::element(2, Some("aa:bb:cc:dd:ee:ff")));
        let outcome = d.finish();
        assert_eq!(outcome.registry.report_conflicts(), &[addr("AA:BB:CC:DD:EE:FF")]);
        assert_eq!(outcome.registry.dump_all().len(), 1);
    }
}
