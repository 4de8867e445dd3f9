use super::classify::{AngleClass, SideClass};
use super::query::Query;
use super::wire::TutorAnswer;
use crate::triangle::{Angles, Sides};

const HELP_ANSWER: &str =
    "I can help you calculate the Area, Perimeter, or Type of this triangle. Try asking 'Calculate the area'!";
const HELP_RULE: &str = "I am a simple geometry bot.";

/// Answer free text about the current triangle.
pub fn answer(text: &str, sides: &Sides, angles: &Angles) -> TutorAnswer {
    solve(Query::parse(text), sides, angles)
}

/// Answer a parsed query.
pub fn solve(query: Query, sides: &Sides, angles: &Angles) -> TutorAnswer {
    match query {
        Query::Area => area(sides),
        Query::Perimeter => perimeter(sides),
        Query::Classify => classify(sides, angles),
        Query::Help => TutorAnswer {
            answer: HELP_ANSWER.to_string(),
            rule: HELP_RULE.to_string(),
            steps: Vec::new(),
        },
    }
}

/// Heron's formula. The radicand is floored at zero so a flat triangle
/// reports area 0 rather than NaN.
pub fn heron_area(sides: &Sides) -> f64 {
    let s = sides.semi_perimeter();
    (s * (s - sides.a) * (s - sides.b) * (s - sides.c)).max(0.0).sqrt()
}

fn area(sides: &Sides) -> TutorAnswer {
    let Sides { a, b, c } = *sides;
    let s = sides.semi_perimeter();
    let area = heron_area(sides);
    TutorAnswer {
        answer: format!("The area is {:.2} square units.", area),
        rule: "Heron's Formula: Area = √(s(s-a)(s-b)(s-c)), where s is the semi-perimeter.".to_string(),
        steps: vec![
            format!("1. Calculate semi-perimeter s = ({:.1} + {:.1} + {:.1}) / 2 = {:.2}", a, b, c, s),
            format!(
                "2. Apply formula: √({s:.2} * ({s:.2}-{a:.1}) * ({s:.2}-{b:.1}) * ({s:.2}-{c:.1}))",
                s = s,
                a = a,
                b = b,
                c = c
            ),
            format!("3. Result: {:.2}", area),
        ],
    }
}

fn perimeter(sides: &Sides) -> TutorAnswer {
    let Sides { a, b, c } = *sides;
    let p = sides.perimeter();
    TutorAnswer {
        answer: format!("The perimeter is {:.2} units.", p),
        rule: "Perimeter = a + b + c".to_string(),
        steps: vec![
            format!("1. Sum all sides: {:.1} + {:.1} + {:.1}", a, b, c),
            format!("2. Result: {:.2}", p),
        ],
    }
}

fn classify(sides: &Sides, angles: &Angles) -> TutorAnswer {
    let side_class = SideClass::of(sides);
    let angle_class = AngleClass::of(angles);
    TutorAnswer {
        answer: format!("This is a {} {} triangle.", side_class, angle_class),
        rule: "Classification by sides (Equilateral, Isosceles, Scalene) and angles (Acute, Right, Obtuse)."
            .to_string(),
        steps: vec![side_class.reason().to_string(), angle_class.reason().to_string()],
    }
}
