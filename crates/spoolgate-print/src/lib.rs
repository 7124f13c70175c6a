// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Spoolgate — host print subsystem access.
//
// This crate owns everything between the HTTP surface and the operating
// system: printer enumeration, remote document download, hand-off to the
// external print tool, and the cash-drawer signal. The `PrintService`
// orchestrator wires the capability traits together; the HTTP crate only
// ever talks to the service.

pub mod directory;
pub mod dispatch;
pub mod drawer;
pub mod exec;
pub mod fetch;
pub mod service;
pub mod traits;

pub use directory::host_directory;
pub use dispatch::ExternalDocumentDispatcher;
pub use drawer::ScriptDrawerSignaler;
pub use fetch::{HttpFetcher, TemporaryDocument};
pub use service::PrintService;
pub use traits::{DocumentDispatcher, DrawerSignaler, PrinterDirectory, RemoteFetcher};
