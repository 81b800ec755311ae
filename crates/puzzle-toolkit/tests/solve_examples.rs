use puzzle_toolkit::{
    count_distinct_paths, is_consistent, order, reachable_terminals, solve, Constraint, Error,
    Grid, Parts, Position, Puzzle, SolveConfig,
};

fn solve_both(puzzle: Puzzle, input: &str) -> (String, String) {
    let answers = solve(puzzle, input, Parts::Both, &SolveConfig::default())
        .unwrap_or_else(|err| panic!("{} failed: {}", puzzle, err));
    (answers.part1.unwrap(), answers.part2.unwrap())
}

#[test]
fn trails_example() {
    let input = "\
89010123
78121874
87430965
96549874
45678903
32019012
01329801
10456732
";
    assert_eq!(solve_both(Puzzle::Trails, input), ("36".into(), "81".into()));
}

#[test]
fn page_order_example() {
    let input = "\
47|53
97|13
97|61
97|47
75|29
61|13
75|53
29|13
97|29
53|29
61|53
97|53
61|29
47|13
75|47
97|75
47|61
75|61
47|29
75|13
53|13

75,47,61,53,29
97,61,53,29,13
75,29,13
75,97,47,61,53
61,13,29
97,13,75,29,47
";
    assert_eq!(solve_both(Puzzle::PageOrder, input), ("143".into(), "123".into()));
}

#[test]
fn calibration_example() {
    let input = "\
190: 10 19
3267: 81 40 27
83: 17 5
156: 15 6
7290: 6 8 6 15
161011: 16 10 13
192: 17 8 14
21037: 9 7 18 13
292: 11 6 16 20
";
    assert_eq!(
        solve_both(Puzzle::Calibration, input),
        ("3749".into(), "11387".into())
    );
}

#[test]
fn stones_example() {
    // Expanding 75 blinks stone by stone would need ~6.5e13 entries
    let answers = solve(
        Puzzle::Stones,
        "125 17",
        Parts::Both,
        &SolveConfig::default(),
    )
    .unwrap();
    assert_eq!(answers.part1.as_deref(), Some("55312"));
    assert_eq!(answers.part2.as_deref(), Some("65601038650482"));
}

#[test]
fn patrol_example() {
    let input = "\
....#.....
.........#
..........
..#.......
.......#..
..........
.#..^.....
........#.
#.........
......#...
";
    assert_eq!(solve_both(Puzzle::Patrol, input), ("41".into(), "6".into()));
}

#[test]
fn malformed_inputs_fail_the_solve() {
    let config = SolveConfig::default();
    let cases = [
        (Puzzle::Trails, "012\n01\n"),
        (Puzzle::PageOrder, "1|2\n"),
        (Puzzle::Calibration, "12 3 4\n"),
        (Puzzle::Stones, "1 two 3"),
        (Puzzle::Patrol, "..#\n...\n"),
    ];
    for (puzzle, input) in cases {
        assert!(
            solve(puzzle, input, Parts::Both, &config).is_err(),
            "{} accepted {:?}",
            puzzle,
            input
        );
    }
}

#[test]
fn walker_start_must_be_on_grid() {
    let grid = Grid::parse_digits("0123456789").unwrap();
    let step = |a: &u8, b: &u8| *b == *a + 1;
    let peak = |h: &u8| *h == 9;
    assert!(matches!(
        reachable_terminals(&grid, Position::new(10, 0), step, peak),
        Err(Error::OutOfBounds { .. })
    ));
    assert_eq!(
        count_distinct_paths(&grid, Position::new(0, 0), step, peak).unwrap(),
        1
    );
}

#[test]
fn ordering_agrees_with_consistency_check() {
    let constraints: Vec<Constraint<u32>> = [(1, 5), (5, 3), (2, 3), (4, 2), (1, 4)]
        .iter()
        .map(|&(before, after)| Constraint::new(before, after))
        .collect();
    let items = [3, 2, 5, 4, 1];
    assert!(!is_consistent(&items, &constraints));

    let ordered = order(&items, &constraints).unwrap();
    assert!(is_consistent(&ordered, &constraints));
    assert_eq!(order(&ordered, &constraints).unwrap(), ordered);
}
