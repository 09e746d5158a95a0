pub mod simulated;

pub use simulated::SimulatedClient;
