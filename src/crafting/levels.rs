//! Experience thresholds and level resolution.

use std::collections::BTreeMap;

pub const MIN_LEVEL: u32 = 1;
pub const MAX_LEVEL: u32 = 99;

/// Minimum cumulative experience per level; index 0 is level 1.
pub const XP_TABLE: [u64; 99] = [
    0, 83, 174, 276, 388, 512, 650, 801,
    969, 1154, 1358, 1584, 1833, 2107, 2411, 2746,
    3115, 3523, 3973, 4470, 5018, 5624, 6291, 7028,
    7842, 8740, 9730, 10_824, 12_031, 13_363, 14_833, 16_456,
    18_247, 20_224, 22_406, 24_815, 27_473, 30_408, 33_648, 37_224,
    41_171, 45_529, 50_339, 55_649, 61_512, 67_983, 75_127, 83_014,
    91_721, 101_333, 111_945, 123_660, 136_594, 150_872, 166_636, 184_040,
    203_254, 224_466, 247_886, 273_742, 302_288, 333_804, 368_599, 407_015,
    449_428, 496_254, 547_953, 605_032, 668_051, 737_627, 814_445, 899_257,
    992_895, 1_096_278, 1_210_421, 1_336_443, 1_475_581, 1_629_200, 1_798_808, 1_986_068,
    2_192_818, 2_421_087, 2_673_114, 2_951_373, 3_258_594, 3_597_792, 3_972_294, 4_385_776,
    4_842_295, 5_346_332, 5_902_831, 6_517_253, 7_195_629, 7_944_614, 8_771_558, 9_684_577,
    10_692_629, 11_805_606, 13_034_431,
];

/// Experience needed to reach `level`, or `None` outside 1..=99.
pub fn xp_for_level(level: u32) -> Option<u64> {
    if !(MIN_LEVEL..=MAX_LEVEL).contains(&level) {
        return None;
    }
    XP_TABLE.get((level - 1) as usize).copied()
}

/// Highest level whose threshold is at or below `xp`.
pub fn level_for_xp(xp: u64) -> u32 {
    for level in (MIN_LEVEL..=MAX_LEVEL).rev() {
        if XP_TABLE[(level - 1) as usize] <= xp {
            return level;
        }
    }
    MIN_LEVEL
}

/// Resolve every skill of a character to its level, keyed by lowercase name.
pub fn skill_levels(skills: &BTreeMap<String, u64>) -> BTreeMap<String, u32> {
    skills
        .iter()
        .map(|(name, xp)| (name.to_lowercase(), level_for_xp(*xp)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_monotonic() {
        assert!(XP_TABLE.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(XP_TABLE[0], 0);
    }

    #[test]
    fn resolves_known_levels() {
        assert_eq!(level_for_xp(0), 1);
        assert_eq!(level_for_xp(82), 1);
        assert_eq!(level_for_xp(83), 2);
        assert_eq!(level_for_xp(200), 3);
        assert_eq!(level_for_xp(276), 4);
        assert_eq!(level_for_xp(13_034_430), 98);
        assert_eq!(level_for_xp(13_034_431), 99);
        assert_eq!(level_for_xp(u64::MAX), 99);
    }

    #[test]
    fn every_threshold_is_a_boundary() {
        for level in MIN_LEVEL..=MAX_LEVEL {
            let xp = xp_for_level(level).unwrap();
            assert_eq!(level_for_xp(xp), level, "threshold of level {}", level);
            if level > 1 {
                assert_eq!(level_for_xp(xp - 1), level - 1);
            }
        }
    }

    #[test]
    fn xp_for_level_rejects_out_of_range() {
        assert_eq!(xp_for_level(0), None);
        assert_eq!(xp_for_level(100), None);
        assert_eq!(xp_for_level(3), Some(174));
    }

    #[test]
    fn skill_levels_lowercase_names() {
        let mut skills = BTreeMap::new();
        skills.insert("Carpentry".to_string(), 200);
        skills.insert("smithing".to_string(), 0);
        let levels = skill_levels(&skills);
        assert_eq!(levels.get("carpentry"), Some(&3));
        assert_eq!(levels.get("smithing"), Some(&1));
    }
}
