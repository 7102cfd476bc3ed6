//! Small cross-cutting helpers shared by session and page code.

pub mod clock;
