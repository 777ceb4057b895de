// ─── Launch Core ───
// Turns an installed version into a running Java process.
//
// Architecture:
//   core/
//     platform    — OS/arch identity used for rules and natives
//     maven/      — Library coordinate parsing + on-disk layout
//     version/    — Version descriptor model, library rules, descriptor loading
//     launch/     — Library paths, classpath, game arguments, command, process
//     config      — Launch request defaults + environment overrides

pub mod config;
pub mod error;
pub mod launch;
pub mod maven;
pub mod platform;
pub mod version;
