//! Body text rendering (text → blocks → HTML)

mod render;
