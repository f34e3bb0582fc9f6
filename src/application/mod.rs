// Application layer - Dashboard use cases
pub mod chart_adapter;
pub mod machine_gateway;
pub mod poll_loop;
pub mod session;
pub mod settings_dispatcher;

#[cfg(test)]
pub(crate) mod testing;
