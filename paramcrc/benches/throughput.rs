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

use std::fmt;
use std::sync::OnceLock;

use divan::{black_box, counter::BytesCount, Bencher};
use paramcrc::{Engine, Method};

fn main() {
    divan::main();
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct DatasetSpec {
    label: &'static str,
    size: usize,
}

impl DatasetSpec {
    const fn new(label: &'static str, size: usize) -> Self {
        Self { label, size }
    }
}

impl fmt::Display for DatasetSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label)
    }
}

const DATASET_SPEC_LIST: [DatasetSpec; 3] = [
    DatasetSpec::new(" 64B", 64),
    DatasetSpec::new("4KiB", 4 * 1024),
    DatasetSpec::new("4MiB", 4 * 1024 * 1024),
];

const DATASET_SPECS: &[DatasetSpec] = &DATASET_SPEC_LIST;

struct DatasetStorage {
    spec: DatasetSpec,
    data: OnceLock<Box<[u8]>>,
}

impl DatasetStorage {
    const fn new(spec: DatasetSpec) -> Self {
        Self {
            spec,
            data: OnceLock::new(),
        }
    }

    fn payload(&'static self) -> &'static [u8] {
        self.data
            .get_or_init(|| generate_payload(self.spec.size).into_boxed_slice())
            .as_ref()
    }
}

static DATASET_STORAGE: [DatasetStorage; 3] = [
    DatasetStorage::new(DATASET_SPEC_LIST[0]),
    DatasetStorage::new(DATASET_SPEC_LIST[1]),
    DatasetStorage::new(DATASET_SPEC_LIST[2]),
];

macro_rules! register_method_bench {
    ($fn_name:ident, $method:expr, $name:literal) => {
        #[divan::bench(name = $name, args = DATASET_SPECS)]
        fn $fn_name(bencher: Bencher, dataset: DatasetSpec) {
            bench_method(bencher, dataset, $method);
        }
    };
}

register_method_bench!(bench_bitwise, Method::Bitwise, "crc32/bitwise");
register_method_bench!(bench_bytewise, Method::Bytewise, "crc32/bytewise");
register_method_bench!(bench_wordwise, Method::Wordwise, "crc32/wordwise");

fn bench_method(bencher: Bencher, dataset: DatasetSpec, method: Method) {
    let payload = dataset_payload(dataset);
    let config = *Engine::from_template("crc-32-iso-hdlc")
        .expect("built-in catalogue entry")
        .configuration();
    bencher
        .counter(BytesCount::from(payload.len() as u64))
        .bench(|| {
            let mut engine = Engine::with_method(config, method);
            engine.update(payload);
            black_box(engine.digest());
        });
}

fn dataset_payload(spec: DatasetSpec) -> &'static [u8] {
    DATASET_STORAGE
        .iter()
        .find(|storage| storage.spec == spec)
        .unwrap_or_else(|| panic!("unknown dataset: {}", spec.label))
        .payload()
}

fn generate_payload(size: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(size);
    let mut state = 0x1234_5678u64;
    for _ in 0..size {
        state ^= state << 7;
        state ^= state >> 9;
        state ^= state << 8;
        data.push((state & 0xFF) as u8);
    }
    data
}
