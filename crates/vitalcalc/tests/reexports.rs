#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use vitalcalc::core::{calc, protocol::BmiRequest};
use vitalcalc::server::{app_state::AppState, config, router};

#[test]
fn core_reexports_resolve() {
    assert_eq!(calc::calculate_bmi(2.0, 100.0), 25.0);
    let input = BmiRequest { height: Some(1.8), weight: Some(75.0) }.validate().unwrap();
    assert_eq!(input.compute().unwrap(), 23.15);
}

#[test]
fn server_reexports_resolve() {
    let state = AppState::new(config::load_from_str("version: 1\n").unwrap());
    let _app = router::build_router(state.clone());
    assert!(!state.is_draining());
}
