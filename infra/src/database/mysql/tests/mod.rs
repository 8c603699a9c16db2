//! Repository tests against a live MySQL database.
//!
//! Run with `DATABASE_URL` pointing at a disposable schema and `--ignored`.
