pub mod spec;

pub use spec::{
    load_file_from_path, load_scenario_from_path, resolve_scenario, validate, ReceiverSpec,
    ScenarioFile, TransmitterSpec,
};
