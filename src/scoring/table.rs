//! 原始分（54 题制）到 200-800 量表分的换算表。

use crate::constants::{MAX_SCALED_SCORE, MIN_SCALED_SCORE};

/// (原始分, 量表分)，按原始分升序，量表分单调不减
pub const RAW_TO_SCALED: [(u32, u32); 55] = [
    (0, 200),
    (1, 210),
    (2, 220),
    (3, 230),
    (4, 250),
    (5, 260),
    (6, 280),
    (7, 290),
    (8, 310),
    (9, 320),
    (10, 340),
    (11, 350),
    (12, 360),
    (13, 370),
    (14, 380),
    (15, 390),
    (16, 400),
    (17, 410),
    (18, 420),
    (19, 430),
    (20, 450),
    (21, 460),
    (22, 470),
    (23, 480),
    (24, 490),
    (25, 500),
    (26, 520),
    (27, 530),
    (28, 540),
    (29, 550),
    (30, 560),
    (31, 570),
    (32, 580),
    (33, 590),
    (34, 600),
    (35, 610),
    (36, 620),
    (37, 630),
    (38, 640),
    (39, 650),
    (40, 660),
    (41, 670),
    (42, 680),
    (43, 690),
    (44, 700),
    (45, 710),
    (46, 720),
    (47, 730),
    (48, 740),
    (49, 750),
    (50, 760),
    (51, 770),
    (52, 780),
    (53, 790),
    (54, 800),
];

/// 表内有该原始分时直接取值，否则在最近的上下两项之间线性插值，结果夹在 [200, 800]
pub fn interpolate(table: &[(u32, u32)], raw: u32) -> u32 {
    let scaled = match table.binary_search_by_key(&raw, |&(r, _)| r) {
        Ok(idx) => table[idx].1,
        Err(idx) => {
            let lower = idx.checked_sub(1).and_then(|i| table.get(i));
            let upper = table.get(idx);
            match (lower, upper) {
                (Some(&(r0, s0)), Some(&(r1, s1))) => {
                    let t = (raw - r0) as f64 / (r1 - r0) as f64;
                    (s0 as f64 + t * (s1 as f64 - s0 as f64)).round() as u32
                }
                (Some(&(_, s)), None) | (None, Some(&(_, s))) => s,
                (None, None) => MIN_SCALED_SCORE,
            }
        }
    };
    scaled.clamp(MIN_SCALED_SCORE, MAX_SCALED_SCORE)
}

pub fn scaled_from_raw(raw: u32) -> u32 {
    interpolate(&RAW_TO_SCALED, raw)
}
