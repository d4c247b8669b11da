//! Backend construction tests

mod variant_test;
