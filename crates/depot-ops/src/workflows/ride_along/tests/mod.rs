mod common;
mod recorder;
mod routing;
mod scoring;
mod session;
