//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter | Implements  | Connects to                         |
//! |---------|-------------|-------------------------------------|
//! | `wifi`  | ScannerPort | ESP-IDF WiFi STA scan / host table  |

pub mod wifi;
