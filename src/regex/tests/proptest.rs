use super::super::OperatorKind;
use crate::{
    compile,
    fsm::{subset_construction, Nfa, Simulatable, StateSet},
};
use proptest::{collection, prelude::*};
use std::collections::BTreeSet;

/// Expression over the supported regex operators, used as the reference for
/// the compiled automata.
#[derive(Debug, Clone)]
enum Expr {
    Sym(char),
    Star(Box<Expr>),
    Concat(Box<Expr>, Box<Expr>),
    Alt(Box<Expr>, Box<Expr>),
    Group(Box<Expr>),
}

impl ToString for Expr {
    fn to_string(&self) -> String {
        use Expr::*;
        match self {
            Sym(c) => c.to_string(),
            // Binary expressions are always parenthesized, so a star applies
            // to the whole inner expression.
            Star(inner) => format!("{}*", inner.to_string()),
            Concat(lhs, rhs) => format!("({}.{})", lhs.to_string(), rhs.to_string()),
            Alt(lhs, rhs) => format!("({}|{})", lhs.to_string(), rhs.to_string()),
            Group(inner) => format!("({})", inner.to_string()),
        }
    }
}

impl Expr {
    /// Returns every position the expression can stop at when matching from
    /// `start`.
    fn ends(&self, input: &[char], start: usize) -> BTreeSet<usize> {
        use Expr::*;
        match self {
            Sym(c) => match input.get(start) {
                Some(ch) if ch == c => BTreeSet::from([start + 1]),
                _ => BTreeSet::new(),
            },
            Concat(lhs, rhs) => lhs
                .ends(input, start)
                .into_iter()
                .flat_map(|mid| rhs.ends(input, mid))
                .collect(),
            Alt(lhs, rhs) => {
                let mut ends = lhs.ends(input, start);
                ends.extend(rhs.ends(input, start));
                ends
            }
            Group(inner) => inner.ends(input, start),
            Star(inner) => {
                let mut ends = BTreeSet::from([start]);
                let mut frontier = vec![start];

                while let Some(pos) = frontier.pop() {
                    for end in inner.ends(input, pos) {
                        if ends.insert(end) {
                            frontier.push(end);
                        }
                    }
                }

                ends
            }
        }
    }

    fn matches(&self, input: &str) -> bool {
        let input = input.chars().collect::<Vec<_>>();
        self.ends(&input, 0).contains(&input.len())
    }
}

/// Every string over `abc` of at most four characters.
fn inputs() -> Vec<String> {
    let mut inputs = vec![String::new()];
    let mut last = vec![String::new()];

    for _ in 0..4 {
        last = last
            .iter()
            .flat_map(|prefix| "abc".chars().map(move |c| format!("{}{}", prefix, c)))
            .collect();
        inputs.extend(last.iter().cloned());
    }

    inputs
}

fn arb_expression() -> impl Strategy<Value = Expr> {
    let leaf = prop_oneof![Just('a'), Just('b'), Just('c')].prop_map(Expr::Sym);

    leaf.prop_recursive(4, 24, 2, |inner| {
        (inner.clone(), any::<OperatorKind>(), inner).prop_map(|(lhs, op, rhs)| match op {
            OperatorKind::Concat => Expr::Concat(Box::new(lhs), Box::new(rhs)),
            OperatorKind::Alt => Expr::Alt(Box::new(lhs), Box::new(rhs)),
            OperatorKind::Star => Expr::Star(Box::new(lhs)),
            OperatorKind::LeftParen | OperatorKind::RightParen => Expr::Group(Box::new(lhs)),
        })
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn dfa_recognizes_the_language(r in arb_expression()) {
        let regex = r.to_string();
        let compiled = compile(&regex).expect(&regex);

        for input in inputs() {
            prop_assert_eq!(compiled.dfa.accepts(&input), r.matches(&input), "{} on {:?}", regex, input);
            prop_assert_eq!(compiled.nfa.accepts(&input), r.matches(&input), "{} on {:?}", regex, input);
        }
    }

    #[test]
    fn star_accepts_empty_string(r in arb_expression()) {
        let regex = format!("({})*", r.to_string());
        prop_assert!(compile(&regex).expect(&regex).dfa.accepts(""));
    }

    #[test]
    fn alternation_is_union(lhs in arb_expression(), rhs in arb_expression()) {
        let (lhs, rhs) = (lhs.to_string(), rhs.to_string());
        let union = compile(&format!("({})|({})", lhs, rhs)).unwrap().dfa;
        let (lhs, rhs) = (compile(&lhs).unwrap().dfa, compile(&rhs).unwrap().dfa);

        for input in inputs() {
            prop_assert_eq!(union.accepts(&input), lhs.accepts(&input) || rhs.accepts(&input));
        }
    }

    #[test]
    fn concatenation_splits_input(lhs in arb_expression(), rhs in arb_expression()) {
        let (lhs, rhs) = (lhs.to_string(), rhs.to_string());
        let concat = compile(&format!("({}).({})", lhs, rhs)).unwrap().dfa;
        let (lhs, rhs) = (compile(&lhs).unwrap().dfa, compile(&rhs).unwrap().dfa);

        for input in inputs() {
            let split = (0..=input.len())
                .any(|mid| lhs.accepts(&input[..mid]) && rhs.accepts(&input[mid..]));
            prop_assert_eq!(concat.accepts(&input), split, "{:?}", input);
        }
    }

    #[test]
    fn eps_closure_is_a_fixed_point(
        r in arb_expression(),
        picks in collection::vec(any::<prop::sample::Index>(), 0..6),
    ) {
        let nfa: Nfa = r.to_string().parse().unwrap();
        let states = nfa.states().into_iter().collect::<Vec<_>>();
        let picked = picks.iter().map(|i| *i.get(&states)).collect::<StateSet>();

        let closure = nfa.eps_closure(&picked);
        prop_assert!(closure.is_superset(&picked));
        prop_assert_eq!(nfa.eps_closure(&closure), closure);
    }

    #[test]
    fn dfa_is_deterministic(r in arb_expression()) {
        let nfa: Nfa = r.to_string().parse().unwrap();
        let (dfa, sets) = subset_construction(&nfa);

        // Dense ids, one per distinct state set.
        prop_assert_eq!(dfa.states(), (0..sets.len()).collect::<StateSet>());
        prop_assert_eq!(sets.iter().collect::<BTreeSet<_>>().len(), sets.len());

        for (source, row) in dfa.transitions() {
            for (symbol, end) in row {
                let next = nfa.eps_closure(&nfa.move_on(&sets[*source], *symbol));
                prop_assert_eq!(&sets[*end], &next);
            }
        }

        for (id, set) in sets.iter().enumerate() {
            prop_assert_eq!(dfa.is_final(id), nfa.contains_final(set));
        }
    }
}
