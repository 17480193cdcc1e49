use super::flags::Flags;

#[test]
fn flags_compare() {
    let eq = Flags::compare(4, 4);
    assert!(eq.equal() && !eq.less() && !eq.greater());
    assert_eq!(eq.bits(), 0b001);

    let gt = Flags::compare(5, 4);
    assert!(!gt.equal() && gt.greater());
    assert_eq!(gt.bits(), 0b010);

    let lt = Flags::compare(0, 255);
    assert!(!lt.equal() && lt.less());
    assert_eq!(lt.bits(), 0b100);
}

#[test]
fn flags_start_clear() {
    assert!(!Flags::default().equal());
    assert_eq!(Flags::default().bits(), 0);
}
