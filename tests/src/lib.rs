//! End-to-end fetch cycles against a local HTTP server.

#[cfg(test)]
mod cycle;
#[cfg(test)]
mod support;
