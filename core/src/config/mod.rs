mod load;
mod types;
mod validate;

pub use load::{load_default, load_from_path, DEFAULT_CONFIG_FILE};
pub use types::{
    AppConfig, ClientConfig, ClientMode, CloudConfig, LoggingConfig, Profile, ProvisionConfig,
    DEFAULT_PROFILE,
};
pub use validate::{
    validate_create, validate_teardown, CreatePlan, CreateRequest, ResourceKind,
    ResourceSelection, TeardownPlan,
};
