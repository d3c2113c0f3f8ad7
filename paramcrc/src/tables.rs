// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Process-wide cache of bytewise/wordwise lookup tables.
//!
//! Tables only depend on `(poly_internal, refin)`, not on `init`, `xorout` or
//! `refout` — two configurations that only differ in those fields (e.g. two
//! members of the same catalogue family with different `init`) can and do
//! share a table. Sharing is by reference: every [`crate::Engine`] built from
//! the same `(poly_internal, refin)` pair holds a clone of the same `Arc`, so
//! constructing many engines for the same algorithm allocates the tables
//! exactly once.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};

use crate::kernel::bytewise;
use crate::kernel::wordwise;

/// The pair of lookup tables backing the bytewise and wordwise kernels.
pub(crate) struct TableSet {
    pub(crate) bytewise: Arc<[u64; 256]>,
    pub(crate) wordwise: Arc<[[u64; 256]; 8]>,
}

type CacheKey = (u64, bool);
type Cache = Mutex<HashMap<CacheKey, TableSet>>;

fn cache() -> &'static Cache {
    static CACHE: OnceLock<Cache> = OnceLock::new();
    CACHE.get_or_init(|| Mutex::new(HashMap::new()))
}

impl Clone for TableSet {
    fn clone(&self) -> Self {
        TableSet {
            bytewise: Arc::clone(&self.bytewise),
            wordwise: Arc::clone(&self.wordwise),
        }
    }
}

/// Returns the table set for `(poly_internal, refin)`, building and caching
/// it on first use.
pub(crate) fn get_or_build(poly_internal: u64, refin: bool) -> TableSet {
    let key = (poly_internal, refin);
    let mut guard = cache().lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    if let Some(tables) = guard.get(&key) {
        return tables.clone();
    }
    let bytewise_table = bytewise::build_table(poly_internal, refin);
    let wordwise_table = wordwise::build_table(&bytewise_table, refin);
    let tables = TableSet {
        bytewise: Arc::new(bytewise_table),
        wordwise: Arc::new(wordwise_table),
    };
    guard.insert(key, tables.clone());
    tables
}
