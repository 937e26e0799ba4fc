/// Router Module Index
///
/// Organizes the application's routing into access-segregated modules: access
/// control is applied explicitly at the module level (via Axum layers), so a
/// protected endpoint cannot be exposed by accident.

/// Routes accessible to all clients (welcome message, health probe).
pub mod public;

/// Routes protected by the bearer-token middleware. Each handler additionally
/// checks its own required permission string.
pub mod protected;
