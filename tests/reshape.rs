use chrono::NaiveDate;
use pet_qreport::measure::reshape::{LongRecord, NamingOrder, Reshape, normalize_region};
use pet_qreport::table::ScanKey;

fn key(subject: &str, day: u32) -> ScanKey {
    ScanKey::new(subject, NaiveDate::from_ymd_opt(2023, 6, day).unwrap())
}

fn record(k: &ScanKey, region: &str, values: &[Option<f64>]) -> LongRecord {
    LongRecord {
        key: k.clone(),
        region: region.to_string(),
        values: values.to_vec(),
    }
}

#[test]
fn single_region_keeps_its_suffix_value_first() {
    let reshape = Reshape::new(["ScalingFactor"], NamingOrder::ValueFirst);
    let k = key("LDS1", 1);
    let rows = reshape
        .pivot_wider(&[record(&k, "wcbl", &[Some(1.25)])])
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(
        rows[0].columns,
        vec![("ScalingFactor_wcbl".to_string(), Some(1.25))]
    );
}

#[test]
fn single_region_keeps_its_prefix_region_first() {
    let reshape = Reshape::new(["MRIBASED_SUVR", "ClustSize"], NamingOrder::RegionFirst);
    let k = key("LDS1", 1);
    let rows = reshape
        .pivot_wider(&[record(&k, "Left_Caudate", &[Some(1.1), Some(400.0)])])
        .unwrap();
    assert_eq!(
        rows[0].columns,
        vec![
            ("Left_Caudate_MRIBASED_SUVR".to_string(), Some(1.1)),
            ("Left_Caudate_ClustSize".to_string(), Some(400.0)),
        ]
    );
}

#[test]
fn round_trip_is_lossless_for_both_orders() {
    let a = key("LDS1", 1);
    let b = key("LDS2", 3);
    let cases = [
        (
            Reshape::new(["ScalingFactor"], NamingOrder::ValueFirst),
            vec![
                record(&a, "wcbl", &[Some(1.25)]),
                record(&a, "compwm", &[None]),
                record(&b, "wcbl", &[Some(0.98)]),
            ],
        ),
        (
            Reshape::new(["MRIBASED_SUVR", "ClustSize"], NamingOrder::RegionFirst),
            vec![
                record(&a, "Left_Hippocampus", &[Some(1.2), Some(500.0)]),
                record(&a, "ctx_lh_precuneus", &[Some(1.4), None]),
                record(&a, "Brain_Stem", &[None, Some(12.0)]),
                record(&b, "Left_Hippocampus", &[Some(0.9), Some(480.0)]),
            ],
        ),
    ];
    for (reshape, records) in cases {
        let wide = reshape.pivot_wider(&records).unwrap();
        let long = reshape.pivot_longer(&wide).unwrap();
        assert_eq!(long, records);
    }
}

#[test]
fn wide_rows_are_sorted_by_scan() {
    let reshape = Reshape::new(["ScalingFactor"], NamingOrder::ValueFirst);
    let rows = reshape
        .pivot_wider(&[
            record(&key("LDS2", 1), "wcbl", &[Some(1.0)]),
            record(&key("LDS1", 9), "wcbl", &[Some(1.0)]),
            record(&key("LDS1", 2), "wcbl", &[Some(1.0)]),
        ])
        .unwrap();
    let keys: Vec<ScanKey> = rows.into_iter().map(|r| r.key).collect();
    assert_eq!(keys, vec![key("LDS1", 2), key("LDS1", 9), key("LDS2", 1)]);
}

#[test]
fn repeated_region_is_an_error() {
    let reshape = Reshape::new(["ScalingFactor"], NamingOrder::ValueFirst);
    let k = key("LDS1", 1);
    let res = reshape.pivot_wider(&[
        record(&k, "wcbl", &[Some(1.0)]),
        record(&k, "wcbl", &[Some(2.0)]),
    ]);
    assert!(res.is_err());
}

#[test]
fn region_separators_are_normalized() {
    assert_eq!(normalize_region("Left-Hippocampus"), "Left_Hippocampus");
    assert_eq!(normalize_region("ctx-lh-precuneus"), "ctx_lh_precuneus");
}
