/// Inbound ports (Driving ports) - Interaction interfaces
///
/// These ports define what the shell (CLI, page controls) can ask of the
/// dashboard once it is loaded.
pub mod dashboard_interaction_port;

pub use dashboard_interaction_port::DashboardInteractionPort;
