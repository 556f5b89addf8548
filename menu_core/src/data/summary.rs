use std::collections::BTreeMap;

use super::{course::Course, item::MenuItem};

/// Aggregate figures for one course.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct CourseSummary {
    /// Number of dishes in the course. Never zero.
    pub count: usize,
    /// Mean price of the dishes in the course, unrounded.
    pub average_price: f64,
}

/// Groups the items by course and computes the count and average price of each
/// course. Courses without items are absent, so an empty input gives an empty
/// map. Iteration order is the declaration order of [`Course`].
pub fn summarize<'a, I>(items: I) -> BTreeMap<Course, CourseSummary>
where
    I: IntoIterator<Item = &'a MenuItem>,
{
    // (count, total price) per course
    let mut totals: BTreeMap<Course, (usize, f64)> = BTreeMap::new();
    for item in items {
        let (count, total) = totals.entry(item.course).or_insert((0, 0.0));
        *count += 1;
        *total += item.price;
    }

    totals
        .into_iter()
        .map(|(course, (count, total))| {
            (course, CourseSummary { count, average_price: total / count as f64 })
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    fn item(id: u64, course: Course, price: f64) -> MenuItem {
        MenuItem {
            id: id.into(),
            name: format!("dish {id}"),
            description: "something".to_string(),
            course,
            price,
        }
    }

    #[test]
    fn empty_input_gives_empty_summary() {
        assert!(summarize(&Vec::<MenuItem>::new()).is_empty());
    }

    #[test]
    fn groups_and_averages() {
        let items = vec![
            item(1, Course::Main, 100.0),
            item(2, Course::Main, 200.0),
            item(3, Course::Dessert, 50.0),
        ];

        let summary = summarize(&items);
        assert_eq!(
            summary,
            BTreeMap::from([
                (Course::Main, CourseSummary { count: 2, average_price: 150.0 }),
                (Course::Dessert, CourseSummary { count: 1, average_price: 50.0 }),
            ])
        );
        assert!(!summary.contains_key(&Course::Starter));
    }

    #[test]
    fn averages_are_not_rounded() {
        let items = vec![
            item(1, Course::Starter, 10.0),
            item(2, Course::Starter, 10.0),
            item(3, Course::Starter, 11.0),
        ];

        let summary = summarize(&items);
        assert_eq!(summary[&Course::Starter].count, 3);
        assert_eq!(summary[&Course::Starter].average_price, 31.0 / 3.0);
    }

    #[test]
    fn reported_in_course_order() {
        let items = vec![
            item(1, Course::Dessert, 1.0),
            item(2, Course::Starter, 2.0),
            item(3, Course::Main, 3.0),
        ];

        let courses: Vec<_> = summarize(&items).into_keys().collect();
        assert_eq!(courses, vec![Course::Starter, Course::Main, Course::Dessert]);
    }
}
