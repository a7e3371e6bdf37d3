//! Canned SPLICE programs used by the tests and the benchmark.

use once_cell::sync::Lazy;

pub const DEFAULT_SOURCE_EXT: &str = "spl";

static DEMO_PROG: Lazy<String> = Lazy::new(build_demo_prog);

/// A small but representative task: read an attitude angle, steer the
/// camera nadir, take one frame, halt into the literal block.
pub fn demo_prog() -> &'static str {
    Lazy::force(&DEMO_PROG).as_str()
}

fn build_demo_prog() -> String {
    [
        "// demo task: one nadir-pointed camera frame",
        "1, 4, 60, 12",
        "OP_GET, INST_ADC, P_ADC_ANGX, FREG_A",
        "OP_SIN, PRE_NORMAL, FREG_A, FREG_B",
        "OP_ACT, INST_ADC, A_ADC_NADIR, IREG_A",
        "OP_SET, INST_IMG, P_IMG_EXPOSE, IREG_B",
        "OP_ACT, INST_IMG, A_IMG_DO_JPG, IREG_C",
        "OP_HLT",
        "// literals follow",
        "120i",
        "0.5f",
    ]
    .join("\n")
}
