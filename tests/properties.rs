use quickcheck::{Arbitrary, Gen, QuickCheck};

/// A printable ASCII character that can appear on either side of a range in
/// a bracket expression.
#[derive(Clone, Copy, Debug)]
struct RangeEnd(char);

impl Arbitrary for RangeEnd {
    fn arbitrary(g: &mut Gen) -> RangeEnd {
        loop {
            let ch = char::from(b' ' + u8::arbitrary(g) % 95);
            if ch != ']' {
                return RangeEnd(ch);
            }
        }
    }
}

/// A pattern made of alphanumeric literals only.
#[derive(Clone, Debug)]
struct Literals(String);

impl Arbitrary for Literals {
    fn arbitrary(g: &mut Gen) -> Literals {
        let len = usize::arbitrary(g) % 6;
        Literals((0..len).map(|_| *g.choose(&['x', 'y', '1']).unwrap()).collect())
    }
}

#[test]
fn bracket_range_membership() {
    fn prop(lo: RangeEnd, hi: RangeEnd, probe: RangeEnd) -> bool {
        let (lo, hi) = if lo.0 <= hi.0 { (lo.0, hi.0) } else { (hi.0, lo.0) };
        let pattern = regex_fsm::compile(&format!("[{}-{}]", lo, hi)).unwrap();
        let c = probe.0;
        pattern.matches(&c.to_string()) == (lo <= c && c <= hi)
    }
    QuickCheck::new()
        .tests(2_000)
        .quickcheck(prop as fn(RangeEnd, RangeEnd, RangeEnd) -> bool);
}

#[test]
fn literal_patterns_match_prefixes() {
    fn prop(pattern: Literals, input: Literals) -> bool {
        let compiled = regex_fsm::compile(&pattern.0).unwrap();
        compiled.matches(&pattern.0)
            && compiled.matches(&input.0) == input.0.starts_with(&pattern.0)
    }
    QuickCheck::new().quickcheck(prop as fn(Literals, Literals) -> bool);
}

#[test]
fn recompiling_gives_independent_equivalent_graphs() {
    fn prop(pattern: Literals, input: Literals) -> bool {
        // Mix in repetition so the splice path is covered too.
        let pattern = format!("z{}*.{}+", pattern.0, pattern.0);
        let first = regex_fsm::compile(&pattern).unwrap();
        let second = regex_fsm::compile(&pattern).unwrap();
        !std::ptr::eq(first.graph(), second.graph())
            && format!("{:?}", first.graph()) == format!("{:?}", second.graph())
            && first.matches(&input.0) == second.matches(&input.0)
    }
    QuickCheck::new().quickcheck(prop as fn(Literals, Literals) -> bool);
}

#[test]
fn shortest_match_agrees_with_matches() {
    fn prop(pattern: Literals, input: Literals) -> bool {
        let pattern = format!("x*{}y+", pattern.0);
        let compiled = regex_fsm::compile(&pattern).unwrap();
        match compiled.shortest_match(&input.0) {
            Some(end) => compiled.matches(&input.0) && compiled.matches(&input.0[..end]),
            None => !compiled.matches(&input.0),
        }
    }
    QuickCheck::new().quickcheck(prop as fn(Literals, Literals) -> bool);
}
