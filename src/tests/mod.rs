mod region_code;

use crate::{Metadata, PhoneInput};

const TEST_METADATA: &str = include_str!("test_metadata.json");

static ONCE: std::sync::Once = std::sync::Once::new();

fn get_phone_input() -> PhoneInput {
    ONCE.call_once(|| colog::default_builder()
        .filter_level(log::LevelFilter::Trace)
        .init()
    );

    let metadata = Metadata::from_json_str(TEST_METADATA)
        .expect("Metadata should be valid");
    PhoneInput::new_for_metadata(metadata)
        .expect("Metadata should pass validation")
}
