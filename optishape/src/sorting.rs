use std::cmp::Reverse;

use itertools::Itertools;
use ordered_float::OrderedFloat;

use crate::entities::Item;
use crate::util::SortKey;

/// Orders the items in which they will be offered to the search.
/// Every key is stable: items that compare equal keep their input order.
pub fn sort_items(items: Vec<Item>, key: SortKey) -> Vec<Item> {
    match key {
        SortKey::AreaDesc => items
            .into_iter()
            .sorted_by_cached_key(|i| Reverse(OrderedFloat(i.area)))
            .collect(),
        SortKey::RegularFirst => items
            .into_iter()
            //false < true, so axis-aligned items come first at equal area
            .sorted_by_cached_key(|i| (Reverse(OrderedFloat(i.area)), !i.axis_aligned))
            .collect(),
        SortKey::BboxAreaDesc => items
            .into_iter()
            .sorted_by_cached_key(|i| Reverse(OrderedFloat(i.bbox_area())))
            .collect(),
        SortKey::InputOrder => items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Part, PartKind};
    use crate::geometry::primitives::Point;

    const ROTATIONS: [f64; 1] = [0.0];

    fn items(parts: &[Part]) -> Vec<Item> {
        parts
            .iter()
            .enumerate()
            .map(|(i, p)| Item::new(p, i, &ROTATIONS).unwrap())
            .collect()
    }

    fn ids(items: &[Item]) -> Vec<u64> {
        items.iter().map(|i| i.part_id).collect()
    }

    #[test]
    fn area_desc_is_stable() {
        let parts = [
            Part::new(0, PartKind::Square { side: 2.0 }),
            Part::new(1, PartKind::Rectangle { width: 4.0, height: 3.0 }),
            Part::new(2, PartKind::Rectangle { width: 1.0, height: 4.0 }),
            Part::new(3, PartKind::Rectangle { width: 6.0, height: 2.0 }),
        ];
        let sorted = sort_items(items(&parts), SortKey::AreaDesc);
        assert_eq!(ids(&sorted), vec![1, 3, 0, 2]);
    }

    #[test]
    fn regular_first_breaks_area_ties() {
        let triangle = vec![Point(0.0, 0.0), Point(4.0, 0.0), Point(0.0, 2.0)];
        let parts = [
            Part::new(0, PartKind::Polygon { vertices: triangle }),
            Part::new(1, PartKind::Square { side: 2.0 }),
            Part::new(2, PartKind::Square { side: 1.0 }),
        ];
        let by_area = sort_items(items(&parts), SortKey::AreaDesc);
        assert_eq!(ids(&by_area), vec![0, 1, 2]);
        let regular = sort_items(items(&parts), SortKey::RegularFirst);
        assert_eq!(ids(&regular), vec![1, 0, 2]);
    }

    #[test]
    fn bbox_area_ranks_circles_by_their_square() {
        let parts = [
            Part::new(0, PartKind::Square { side: 9.5 }),
            Part::new(1, PartKind::Circle { radius: 5.0 }),
        ];
        let sorted = sort_items(items(&parts), SortKey::BboxAreaDesc);
        assert_eq!(ids(&sorted), vec![1, 0]);
        let by_area = sort_items(items(&parts), SortKey::AreaDesc);
        assert_eq!(ids(&by_area), vec![0, 1]);
    }
}
