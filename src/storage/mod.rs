// Copyright 2025 Adobe. All rights reserved.
// This file is licensed to you under the Apache License,
// Version 2.0 (http://www.apache.org/licenses/LICENSE-2.0)
// or the MIT license (http://opensource.org/licenses/MIT),
// at your option.
//
// Unless required by applicable law or agreed to in writing,
// this software is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR REPRESENTATIONS OF ANY KIND, either express or
// implied. See the LICENSE-MIT and LICENSE-APACHE files for the
// specific language governing permissions and limitations under
// each license.

//! Read-only filesystem over lakeFS
//!
//! [`FileSystem`] is the capability surface handed to code that opens files by
//! path and enumerates directories. [`LakeFsFileSystem`] implements it on top
//! of [`crate::client::Client`]: four remote calls (stat, get, list and
//! list-with-delimiter) back every read, and every mutation is reported as
//! [`Mutation::Unsupported`].

pub mod lakefs;
pub mod provider;

// Public exports
pub use lakefs::LakeFsFileSystem;
pub use provider::{
    FileInfo, FileSelector, FileSystem, FileType, InputFile, Mutation, OutputStream,
};
