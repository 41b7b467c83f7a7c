// This file is required to make `cargo test` discover tests in subdirectories.

#[cfg(test)]
mod detect;

#[cfg(test)]
mod export;

#[cfg(test)]
mod session;

#[cfg(test)]
mod tabular;
