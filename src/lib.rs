// Library root
// -----------
// This crate exposes a small library surface for the forum seeding
// tool. The binary (`main.rs`) uses these modules to run one seeding
// pass against the backend.
//
// Module responsibilities:
// - `api`: Encapsulates HTTP interactions with the backend (login,
//   forum creation) and the response envelope the backend wraps
//   everything in.
// - `catalog`: The static table of default forums to create.
// - `seeder`: The sequential create loop with per-item failure
//   isolation and rate-limiting delay.
// - `runner`: Composes login and seeding into one run and reports the
//   aggregate result.
//
// Keeping this separation makes it easy to test the seeding loop
// against a fake API, or to reuse the client for other admin tooling.
pub mod api;
pub mod catalog;
pub mod runner;
pub mod seeder;
