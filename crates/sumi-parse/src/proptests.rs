use super::*;
use proptest::prelude::*;
use sumi_core::{Path, PathCommand, Point};

fn coord() -> impl Strategy<Value = f64> {
    // Integers and halves print exactly, so the text form is lossless
    (-2000i32..2000).prop_map(|v| f64::from(v) / 2.0)
}

fn point() -> impl Strategy<Value = Point> {
    (coord(), coord()).prop_map(|(x, y)| Point::new(x, y))
}

fn drawing_command() -> impl Strategy<Value = PathCommand> {
    prop_oneof![
        point().prop_map(PathCommand::LineTo),
        (point(), point()).prop_map(|(c, p)| PathCommand::QuadTo(c, p)),
        (point(), point(), point()).prop_map(|(c1, c2, p)| PathCommand::CubicTo(c1, c2, p)),
    ]
}

/// Subpaths always open with a move, as the parser itself produces them
fn any_path() -> impl Strategy<Value = Path> {
    let subpath = (point(), prop::collection::vec(drawing_command(), 0..8), any::<bool>());
    prop::collection::vec(subpath, 1..4).prop_map(|subpaths| {
        let mut path = Path::new();
        for (start, rest, closed) in subpaths {
            path.move_to(start);
            path.extend(rest);
            if closed {
                path.close();
            }
        }
        path
    })
}

// Property: printing a path and parsing it back gives the same commands
proptest! {
    #[test]
    fn prop_display_round_trips(path in any_path()) {
        let reparsed = parse_path_data(&path.to_string());
        prop_assert_eq!(reparsed, path);
    }
}

// Property: every command consumes at least one token, so garbage never inflates
proptest! {
    #[test]
    fn prop_parser_total_on_garbage(d in "[MLHVCSQTZAmlhvcsqtza0-9 ,.eE+-]{0,64}") {
        let path = parse_path_data(&d);
        let tokens = tokenizer::Tokenizer::new(&d).count();
        prop_assert!(path.len() <= tokens);
    }
}

// Property: polylines have one command per complete coordinate pair
proptest! {
    #[test]
    fn prop_polyline_command_count(coords in prop::collection::vec(coord(), 0..40)) {
        let path = polyline_path(&coords);
        let pairs = coords.len() / 2;
        if pairs < 2 {
            prop_assert!(path.is_empty());
        } else {
            prop_assert_eq!(path.len(), pairs);
        }
    }
}
