use afe_drv::{AfeError, AfePlatform, FsCode};
use afe_mt8188::{CmId, MemifId, Mt8188, PLATFORM, resolve_cm, resolve_rate};

const FAMILY_8K: [u32; 9] = [8000, 12000, 16000, 24000, 32000, 48000, 96000, 192000, 384000];
const FAMILY_44K1: [u32; 9] = [7350, 11025, 14700, 22050, 29400, 44100, 88200, 176400, 352800];

#[test]
fn test_8k_family_codes() {
    for (code, rate) in FAMILY_8K.iter().enumerate() {
        assert_eq!(resolve_rate(*rate).map(FsCode::get), Ok(code as u32), "rate {}", rate);
    }
}

#[test]
fn test_44k1_family_codes() {
    for (i, rate) in FAMILY_44K1.iter().enumerate() {
        assert_eq!(resolve_rate(*rate).map(FsCode::get), Ok(16 + i as u32), "rate {}", rate);
    }
}

#[test]
fn test_unsupported_rates() {
    for rate in [0, 999_999, 44_000, 47_999, 48_001, u32::MAX] {
        assert_eq!(resolve_rate(rate), Err(AfeError::RateNotSupported(rate)));
    }
    assert_eq!(resolve_rate(0).unwrap_err().errno(), -22);
}

#[test]
fn test_documented_examples() {
    assert_eq!(resolve_rate(48000).map(FsCode::get), Ok(5));
    assert_eq!(resolve_rate(44100).map(FsCode::get), Ok(21));
    assert_eq!(resolve_cm(MemifId::Ul10), Some(CmId::Cm2));
    assert_eq!(resolve_cm(MemifId::Dl2), None);
}

#[test]
fn test_only_ul10_has_a_merge_unit() {
    for memif in MemifId::ALL {
        let expected = if memif == MemifId::Ul10 { Some(CmId::Cm2) } else { None };
        assert_eq!(resolve_cm(memif), expected, "{:?}", memif);
    }
    // neighbours in declaration order
    assert_eq!(resolve_cm(MemifId::Ul5), None);
}

#[test]
fn test_platform_hooks_match_free_functions() {
    for rate in FAMILY_8K.iter().chain(FAMILY_44K1.iter()).copied().chain([0, 999_999]) {
        for block in 0..MemifId::COUNT {
            assert_eq!(PLATFORM.afe_fs(rate, block), resolve_rate(rate));
        }
        assert_eq!(PLATFORM.irq_fs(rate), resolve_rate(rate));
    }
    for memif in MemifId::ALL {
        assert_eq!(PLATFORM.found_cm(memif), resolve_cm(memif));
    }
}

#[test]
fn test_repeated_calls_are_identical() {
    let first = resolve_rate(44100);
    for _ in 0..1000 {
        assert_eq!(resolve_rate(44100), first);
        assert_eq!(resolve_rate(1), Err(AfeError::RateNotSupported(1)));
        assert_eq!(resolve_cm(MemifId::Ul10), Some(CmId::Cm2));
    }
}

#[test]
fn test_concurrent_callers_agree() {
    let platform: &'static Mt8188 = &PLATFORM;
    std::thread::scope(|s| {
        let workers: Vec<_> = (0..8)
            .map(|t| {
                s.spawn(move || {
                    let mut seen = Vec::new();
                    for i in 0..500 {
                        let rate = if (i + t) % 2 == 0 { 48000 } else { 352800 };
                        seen.push((rate, platform.afe_fs(rate, 0)));
                        seen.push((0, platform.irq_fs(0)));
                        assert_eq!(platform.found_cm(MemifId::Ul10), Some(CmId::Cm2));
                        assert_eq!(platform.found_cm(MemifId::Ul4), None);
                    }
                    seen
                })
            })
            .collect();

        for worker in workers {
            for (rate, code) in worker.join().unwrap() {
                match rate {
                    48000 => assert_eq!(code, Ok(FsCode::new(5))),
                    352800 => assert_eq!(code, Ok(FsCode::new(24))),
                    _ => assert_eq!(code, Err(AfeError::RateNotSupported(0))),
                }
            }
        }
    });
}
