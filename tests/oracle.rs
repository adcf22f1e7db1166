// Cross-checks the engine against the regex crate on random patterns.
//
// Patterns are sequences of atoms, each followed by at most one quantifier,
// over a tiny alphabet so that random inputs actually exercise matches. The
// regex crate is anchored at the start to get the same prefix semantics.

use quickcheck::{Arbitrary, Gen, QuickCheck};

const ATOMS: &[&str] = &["a", "b", "c", ".", "[ab]", "[a-b]", "[b-c]", "[-a]"];
const INPUT: &[char] = &['a', 'b', 'c', 'd', '-'];

#[derive(Clone, Debug)]
struct Case {
    pattern: String,
    inputs: Vec<String>,
}

impl Arbitrary for Case {
    fn arbitrary(g: &mut Gen) -> Case {
        let mut pattern = String::new();
        for _ in 0..usize::arbitrary(g) % 6 {
            pattern.push_str(g.choose(ATOMS).unwrap());
            match u8::arbitrary(g) % 3 {
                0 => {}
                1 => pattern.push('*'),
                _ => pattern.push('+'),
            }
        }
        let inputs: Vec<String> = (0..4)
            .map(|_| {
                let len = usize::arbitrary(g) % 8;
                (0..len).map(|_| *g.choose(INPUT).unwrap()).collect::<String>()
            })
            .collect();
        Case { pattern, inputs }
    }
}

fn agrees_with_regex(case: Case) -> bool {
    let ours = regex_fsm::compile(&case.pattern).unwrap();
    let oracle = regex::Regex::new(&format!("^(?:{})", case.pattern)).unwrap();
    case.inputs.iter().all(|input| ours.matches(input) == oracle.is_match(input))
}

#[test]
fn random_patterns_agree_with_regex() {
    crate::init_logging();
    QuickCheck::new()
        .tests(2_000)
        .quickcheck(agrees_with_regex as fn(Case) -> bool);
}

#[test]
fn fixed_patterns_agree_with_regex() {
    let patterns = [
        "a", "a*b", "a*b.c+", "a+b+c+", "a*a*a*", "a+a*", "a*a", ".*b", "[a-c]+a",
        "b*c*", "a+kb+c+", "a*b.+ch+",
    ];
    let inputs = [
        "", "a", "b", "aa", "ab", "ba", "aaab", "aaac", "abc", "aaabbbccc", "aaacc",
        "bbbbb", "aaabxc", "aaabxccx", "akbbbccccccckaskd", "aaabxccchhhhasd",
        "aaabxxxxhhhhasd", "cb", "kb",
    ];
    for pattern in patterns {
        let ours = regex_fsm::compile(pattern).unwrap();
        let oracle = regex::Regex::new(&format!("^(?:{})", pattern)).unwrap();
        for input in inputs {
            assert_eq!(
                ours.matches(input),
                oracle.is_match(input),
                "pattern {:?}, input {:?}",
                pattern,
                input
            );
        }
    }
}
