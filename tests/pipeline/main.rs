//! End-to-end tests for `rigdex`: raw records on disk through the
//! compatibility index and its snapshot cache, and model geometry through
//! the packing codec.

mod fixtures;
mod index;
mod mesh;
