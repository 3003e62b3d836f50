use rs_cigar::{
    cigar::{CigarFormat, EditOp},
    op::MAX_LEN,
    Kind, Op, ParseConfig,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_usage() {
    init_logger();

    let op: Op = "76M".parse().unwrap();
    assert_eq!(op.kind(), Kind::Match);
    assert_eq!(op.len(), 76);
    assert_eq!(u32::from(op), 76 << 4);
    assert_eq!(op.to_string(), "76M");
}

#[test]
fn test_walk_positions() {
    init_logger();

    // 5S10M2I3D1N8=4X1H as packed in a BAM record.
    let packed: Vec<u32> = ["5S", "10M", "2I", "3D", "1N", "8=", "4X", "1H"]
        .iter()
        .map(|text| text.parse::<Op>().unwrap().into_bits())
        .collect();

    let (mut query, mut reference) = (0, 0);
    for bits in packed {
        let op = Op::from(bits);
        let consumption = op.consumption();
        query += consumption.query_len(op);
        reference += consumption.reference_len(op);
    }
    // Query: M + D + N + = + X. Reference: S + M + I + = + X.
    assert_eq!(query, 10 + 3 + 1 + 8 + 4);
    assert_eq!(reference, 5 + 10 + 2 + 8 + 4);
}

#[test]
fn test_foreign_bits() {
    init_logger();

    // Low bits 0xF are not a defined kind.
    let op = Op::from(0x0000_012F);
    assert_eq!(op.kind(), Kind::Unknown);
    assert_eq!(op.len(), 0x12);
    assert_eq!(op.to_string(), "18?");
    assert!(!op.consumption().query && !op.consumption().reference);
}

#[test]
fn test_parse_rejects() {
    init_logger();

    let config = ParseConfig::default();
    assert!(Op::parse("", &config).is_err());
    assert!(Op::parse("12", &config).is_err());
    assert!(Op::parse("1.5M", &config).is_err());
    assert!(Op::parse(&format!("{}M", u64::from(MAX_LEN) + 1), &config).is_err());
}

#[test]
fn test_edit_path_runs() {
    init_logger();

    let path = [
        EditOp::Match,
        EditOp::Match,
        EditOp::Mismatch,
        EditOp::Insert,
        EditOp::Match,
    ];

    let mut ops: Vec<Op> = vec![];
    for format in [CigarFormat::Standard, CigarFormat::Extended] {
        ops.clear();
        let mut steps = path.iter().peekable();
        while let Some(step) = steps.next() {
            let kind = step.kind(format);
            let mut len = 1;
            while steps.next_if(|next| next.kind(format) == kind).is_some() {
                len += 1;
            }
            ops.push(Op::new(kind, len));
        }
        let text: String = ops.iter().map(|op| op.to_string()).collect();
        match format {
            CigarFormat::Standard => assert_eq!(text, "3M1I1M"),
            CigarFormat::Extended => assert_eq!(text, "2=1X1I1="),
        }
    }
}
