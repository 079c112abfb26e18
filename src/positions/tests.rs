use super::*;
use crate::config::Config;
use crate::parser::ast::{NodeKind, Position, PositionSet, SyntaxTree};
use crate::parser::Parser;

fn run(pattern: &str) -> (SyntaxTree, Annotations, Followpos) {
    let tree = Parser::parse(pattern, &Config::default()).unwrap();
    let annotations = Annotations::annotate(&tree);
    let followpos = Followpos::build(&tree, &annotations);
    (tree, annotations, followpos)
}

fn set(positions: &[Position]) -> PositionSet {
    positions.iter().copied().collect()
}

#[cfg(test)]
mod annotate {
    use super::*;

    #[test]
    fn leaf() {
        let (tree, annotations, _) = run("a");
        let leaf = tree
            .nodes()
            .find(|(_, kind)| matches!(kind, NodeKind::Leaf { symbol: 'a', .. }))
            .map(|(id, _)| id)
            .unwrap();

        assert_eq!(
            annotations[leaf],
            Attributes {
                nullable: false,
                firstpos: set(&[1]),
                lastpos: set(&[1]),
            }
        );
    }

    #[test]
    fn root_of_textbook_example() {
        let (tree, annotations, _) = run("(a|b)*abb");
        let root = &annotations[tree.root()];

        assert!(!root.nullable);
        assert_eq!(root.firstpos, set(&[1, 2, 3]));
        assert_eq!(root.lastpos, set(&[6]));
    }

    #[test]
    fn star_and_union() {
        let (tree, annotations, _) = run("a(b|c)*d");

        for (id, kind) in tree.nodes() {
            let attrs = &annotations[id];
            match kind {
                NodeKind::Union(_, _) => {
                    assert!(!attrs.nullable);
                    assert_eq!(attrs.firstpos, set(&[2, 3]));
                    assert_eq!(attrs.lastpos, set(&[2, 3]));
                }
                NodeKind::Star(_) => {
                    assert!(attrs.nullable);
                    assert_eq!(attrs.firstpos, set(&[2, 3]));
                    assert_eq!(attrs.lastpos, set(&[2, 3]));
                }
                _ => {}
            }
        }
        assert_eq!(annotations[tree.root()].firstpos, set(&[1]));
    }

    #[test]
    fn nullable_concat() {
        let (tree, annotations, _) = run("a*b*");
        let root = &annotations[tree.root()];

        // a*b* is nullable, so the end marker is reachable first
        assert_eq!(root.firstpos, set(&[1, 2, 3]));
        assert_eq!(root.lastpos, set(&[3]));

        let body = tree.children(tree.root())[0];
        assert!(annotations[body].nullable);
        assert_eq!(annotations[body].firstpos, set(&[1, 2]));
        assert_eq!(annotations[body].lastpos, set(&[1, 2]));
    }

    #[test]
    fn positions_are_in_range() {
        let (tree, annotations, _) = run("((a|b)c*|d)*e(f|g*)");
        let all: PositionSet = tree.positions().collect();

        assert_eq!(annotations.len(), tree.len());
        for (id, _) in tree.nodes() {
            assert!(annotations[id].firstpos.is_subset(&all));
            assert!(annotations[id].lastpos.is_subset(&all));
            assert!(!annotations[id].firstpos.is_empty());
        }
    }
}

#[cfg(test)]
mod followpos {
    use super::*;

    #[test]
    fn textbook_example() {
        let (_, _, followpos) = run("(a|b)*abb");

        assert_eq!(followpos.len(), 6);
        assert_eq!(followpos[1], set(&[1, 2, 3]));
        assert_eq!(followpos[2], set(&[1, 2, 3]));
        assert_eq!(followpos[3], set(&[4]));
        assert_eq!(followpos[4], set(&[5]));
        assert_eq!(followpos[5], set(&[6]));
        assert_eq!(followpos[6], set(&[]));
    }

    #[test]
    fn star_of_union() {
        let (_, _, followpos) = run("a(b|c)*d");

        assert_eq!(
            followpos
                .iter()
                .map(|(p, s)| (p, s.iter().copied().collect::<Vec<_>>()))
                .collect::<Vec<_>>(),
            vec![
                (1, vec![2, 3, 4]),
                (2, vec![2, 3, 4]),
                (3, vec![2, 3, 4]),
                (4, vec![5]),
                (5, vec![]),
            ]
        );
    }

    #[test]
    fn nested_star() {
        let (_, _, followpos) = run("(a*b)*");

        assert_eq!(followpos[1], set(&[1, 2]));
        assert_eq!(followpos[2], set(&[1, 2, 3]));
        assert_eq!(followpos[3], set(&[]));
    }

    #[test]
    fn out_of_range() {
        let (_, _, followpos) = run("a");

        assert_eq!(followpos.get(0), None);
        assert_eq!(followpos.get(1), Some(&set(&[2])));
        assert_eq!(followpos.get(3), None);
    }

    #[test]
    #[should_panic(expected = "position 0 out of range 1..=2")]
    fn index_zero() {
        let (_, _, followpos) = run("a");
        let _ = &followpos[0];
    }

    #[test]
    #[should_panic(expected = "position 3 out of range 1..=2")]
    fn index_past_end() {
        let (_, _, followpos) = run("a");
        let _ = &followpos[3];
    }
}
