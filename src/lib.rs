// ============================================================================
// POKER CLIENT - browser front end for the table server
// ============================================================================
// - Models: wire records and the closed `Action` set
// - Stores: one immutable slice per concern, folded by pure reducers
// - Selectors: memoized read projections
// - Actions: intent constructors and the async sign-in
// - Services: HTTP, token storage, navigation
// - Hooks / Components: Yew views over the store
// ============================================================================

pub mod actions;
pub mod components;
pub mod config;
pub mod hooks;
pub mod models;
pub mod selectors;
pub mod services;
pub mod stores;
pub mod utils;
