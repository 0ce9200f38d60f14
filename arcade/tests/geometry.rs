
use arcade::geometry::{hit_index, hit_test};
use arcade::{Point, Rect};

#[test]
fn boundary_points_are_inside ()
{
    let rect = Rect::new(75.0, 75.0, 150.0, 150.0);

    for (x, y) in [(75.0, 75.0), (225.0, 225.0), (75.0, 150.0), (150.0, 225.0)]
    {
        assert!(hit_test(Point::new(x, y), & rect), "({}, {})", x, y);
    }
}

#[test]
fn one_unit_outside_is_excluded ()
{
    let rect = Rect::new(75.0, 75.0, 150.0, 150.0);

    for (x, y) in [(74.0, 150.0), (226.0, 150.0), (150.0, 74.0), (150.0, 226.0)]
    {
        assert!(! hit_test(Point::new(x, y), & rect), "({}, {})", x, y);
    }
}

#[test]
fn shared_edge_selects_the_first_rectangle ()
{
    let cells = [Rect::new(0.0, 0.0, 10.0, 10.0), Rect::new(10.0, 0.0, 10.0, 10.0)];

    assert_eq!(hit_index(Point::new(10.0, 5.0), & cells), Some(0));
    assert_eq!(hit_index(Point::new(15.0, 5.0), & cells), Some(1));
    assert_eq!(hit_index(Point::new(25.0, 5.0), & cells), None);
}

#[test]
fn overlap_is_inclusive ()
{
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);

    assert!(a.intersects(& Rect::new(10.0, 10.0, 5.0, 5.0)));
    assert!(! a.intersects(& Rect::new(11.0, 0.0, 5.0, 5.0)));
    assert_eq!(a.inset(2.0), Rect::new(2.0, 2.0, 6.0, 6.0));
}
