//! Operation mode determination tests.

use rstest::rstest;

use crate::{EventLensConfig, OperationMode};

#[rstest]
#[case::tui_by_default(EventLensConfig::default(), OperationMode::Tui)]
#[case::listing(
    EventLensConfig { list: true, ..Default::default() },
    OperationMode::Listing
)]
#[case::event_detail(
    EventLensConfig { event_id: Some(7), ..Default::default() },
    OperationMode::EventDetail
)]
#[case::event_id_wins_over_list(
    EventLensConfig { event_id: Some(7), list: true, ..Default::default() },
    OperationMode::EventDetail
)]
fn operation_mode_follows_flags(#[case] config: EventLensConfig, #[case] expected: OperationMode) {
    assert_eq!(config.operation_mode(), expected);
}
