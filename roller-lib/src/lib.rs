pub mod dice;
pub mod error;
mod evaluator;
mod parser;
pub mod roll;
pub mod solver;

pub use evaluator::evaluate;
pub use parser::parse;

#[cfg(test)]
mod tests {
    use crate::dice::Modifier;
    use crate::dice::Spec;
    use crate::error::Error;
    use crate::evaluate;
    use crate::parse;
    use crate::roll::Source;
    use crate::solver::Solver;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    pub struct MockIter<'a, T: Iterator<Item = u64>> {
        pub iter: &'a mut T,
    }

    impl<T: Iterator<Item = u64>> Source for MockIter<'_, T> {
        fn throw(&mut self, sides: u64) -> u64 {
            match self.iter.next() {
                Some(value) => {
                    println!("Dice {}", value);
                    value
                }
                None => panic!("Iterator out of values for a {} sided dice", sides),
            }
        }
    }

    fn roll_mock(notation: &str, mock: Vec<u64>) -> crate::roll::Result {
        let spec = parse(notation).unwrap();
        evaluate(
            &spec,
            &mut MockIter {
                iter: &mut mock.into_iter(),
            },
        )
    }

    #[test]
    fn one_dice_test() {
        let spec = parse("1d20").unwrap();
        assert_eq!(Spec::new(1, 20, Modifier::None).unwrap(), spec);
        let res = roll_mock("1d20", vec![17]);
        assert_eq!(17, res.get_total());
        assert_eq!(&[17], res.get_rolls());
        assert_eq!(&[0], res.get_retained());
        assert_eq!("1d20 [17]=17", res.get_description());
    }

    #[test]
    fn keep_high_test() {
        let spec = parse("4d6kh3").unwrap();
        assert_eq!(4, spec.get_count());
        assert_eq!(6, spec.get_sides());
        assert_eq!(Modifier::KeepHigh(3), spec.get_modifier());

        let res = roll_mock("4d6kh3", vec![5, 2, 6, 4]);
        assert_eq!(15, res.get_total());
        assert_eq!(&[5, 2, 6, 4], res.get_rolls());
        assert_eq!(&[0, 2, 3], res.get_retained());
        assert_eq!(vec![1], res.get_dropped());
        assert!(!res.is_retained(1));
        assert_eq!("4d6kh3 [5,2,6,4]=15", res.to_string());
    }

    #[test]
    fn keep_low_test() {
        let res = roll_mock("4d6kl1", vec![5, 2, 6, 4]);
        assert_eq!(2, res.get_total());
        assert_eq!(&[1], res.get_retained());
        assert_eq!("4d6kl1 [5,2,6,4]=2", res.get_description());
    }

    #[test]
    fn keep_tie_test() {
        let res = roll_mock("3d6kh1", vec![6, 2, 6]);
        assert_eq!(&[0], res.get_retained());
        assert_eq!(6, res.get_total());

        let res = roll_mock("4d6kl2", vec![3, 1, 4, 1]);
        assert_eq!(&[1, 3], res.get_retained());
        assert_eq!(2, res.get_total());
    }

    #[test]
    fn fixed_value_test() {
        let res = Solver::new("11d1").unwrap().solve();
        assert_eq!(11, res.get_total());
        assert_eq!(vec![1; 11], res.get_rolls());
        assert_eq!("11d1 [1,1,1,1,1,1,1,1,1,1,1]=11", res.get_description());

        for count in 1..=50u64 {
            let solver = Solver::new(&format!("{count}d1")).unwrap();
            let mut rng = StdRng::seed_from_u64(count);
            assert_eq!(count, solver.solve_with(&mut rng).get_total());
        }
    }

    #[test]
    fn implicit_amount_test() {
        assert_eq!(Spec::new(1, 20, Modifier::None).unwrap(), parse("d20").unwrap());
        assert_eq!(Spec::new(1, 20, Modifier::None).unwrap(), parse("D20").unwrap());
        assert_eq!(
            Spec::new(4, 6, Modifier::KeepHigh(3)).unwrap(),
            parse("4D6KH3").unwrap()
        );
        assert_eq!(
            Spec::new(4, 6, Modifier::KeepLow(2)).unwrap(),
            parse("4d6Kl2").unwrap()
        );
        let res = roll_mock("d20", vec![8]);
        assert_eq!(8, res.get_total());
    }

    #[test]
    fn reject_syntax_test() {
        for input in [
            "", "abc", "4d6+1", "2d6+1d4", " 1d6", "1d6 ", "-1d6", "+1d6", "d", "4d", "4d6kh",
            "4d6k3", "4d6dh1", "1.5d6", "4d6kh3kl1", "4x6", "46",
        ] {
            match parse(input) {
                Err(Error::Syntax { .. }) => (),
                other => panic!("`{}` should be a syntax error, got {:?}", input, other),
            }
        }
    }

    #[test]
    fn reject_value_test() {
        for input in [
            "0d6",
            "00d6",
            "1d0",
            "4d6kh0",
            "4d6kh5",
            "4d6kl5",
            "5001d6",
            "1d4294967296",
            "99999999999999999999d6",
        ] {
            match parse(input) {
                Err(Error::Value { .. }) => (),
                other => panic!("`{}` should be a value error, got {:?}", input, other),
            }
        }
        assert!(parse("5000d6").is_ok());
        assert!(parse("1d4294967295").is_ok());
    }

    #[test]
    fn offending_input_test() {
        let error = parse("4d6+1").unwrap_err();
        assert_eq!("+1", error.offending());
        let error = parse("abc").unwrap_err();
        assert_eq!("abc", error.offending());
        let error = parse("0d6").unwrap_err();
        assert_eq!("0", error.offending());
        let error = parse("4d6kh5").unwrap_err();
        assert_eq!("kh5", error.offending());
        assert_eq!("can't keep 5 out of 4 dices", error.reason());
        assert_eq!("can't keep 5 out of 4 dices (`kh5`)", error.to_string());
    }

    #[test]
    fn round_trip_test() {
        for input in ["1d20", "d20", "4d6kh3", "4D6KL1", "11d1", "010d6", "5000d4294967295kh5000"] {
            let spec = parse(input).unwrap();
            assert_eq!(spec, parse(&spec.to_string()).unwrap());
            assert_eq!(spec, spec.to_string().parse::<Spec>().unwrap());
        }
        assert_eq!("1d20", parse("d20").unwrap().to_string());
        assert_eq!("4d6kl1", parse("4D6KL1").unwrap().to_string());
        assert_eq!("10d6", parse("010d6").unwrap().to_string());
    }

    #[test]
    fn count_and_range_test() {
        let mut rng = StdRng::seed_from_u64(0xd1ce);
        for count in 1..=30u64 {
            for sides in [1u64, 2, 3, 6, 20, 100] {
                let solver = Solver::new(&format!("{count}d{sides}")).unwrap();
                let res = solver.solve_with(&mut rng);
                assert_eq!(count as usize, res.get_rolls().len());
                assert!(res.get_rolls().iter().all(|&r| (1..=sides).contains(&r)));
                assert_eq!(count as usize, res.get_retained().len());
                assert_eq!(res.get_rolls().iter().sum::<u64>(), res.get_total());
            }
        }
    }

    #[test]
    fn keep_all_is_none_test() {
        for seed in 0..20u64 {
            let all = Solver::new("8d10kh8")
                .unwrap()
                .solve_with(&mut StdRng::seed_from_u64(seed));
            let none = Solver::new("8d10")
                .unwrap()
                .solve_with(&mut StdRng::seed_from_u64(seed));
            assert_eq!(none.get_rolls(), all.get_rolls());
            assert_eq!(none.get_retained(), all.get_retained());
            assert_eq!(none.get_total(), all.get_total());
        }
    }

    #[test]
    fn keep_complement_test() {
        let draws = vec![3, 1, 6, 2, 5, 4];
        for n in 1..6 {
            let high = roll_mock(&format!("6d6kh{n}"), draws.clone());
            let low = roll_mock(&format!("6d6kl{}", 6 - n), draws.clone());
            let mut all: Vec<usize> = high
                .get_retained()
                .iter()
                .chain(low.get_retained())
                .copied()
                .collect();
            all.sort_unstable();
            assert_eq!((0..6).collect::<Vec<_>>(), all);
            assert_eq!(21, high.get_total() + low.get_total());
        }
    }

    #[test]
    fn seeded_solver_test() {
        let solver = Solver::new("4d6kh3").unwrap();
        assert_eq!("4d6kh3", solver.as_str());
        assert_eq!(Modifier::KeepHigh(3), solver.spec().get_modifier());
        let first = solver.solve_with(&mut StdRng::seed_from_u64(42));
        let second = solver.solve_with(&mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
        assert_eq!(3, first.get_retained().len());
    }

    #[test]
    #[should_panic(expected = "source returned 7 for a 6 sided dice")]
    fn out_of_range_source_test() {
        roll_mock("1d6", vec![7]);
    }

    #[test]
    #[should_panic(expected = "source returned 0 for a 6 sided dice")]
    fn zero_source_test() {
        roll_mock("2d6", vec![3, 0]);
    }
}
