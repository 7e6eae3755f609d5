use approx::assert_relative_eq;
use tria_physics::detector::{circle_circle, circle_rect, rect_rect};
use tria_physics::{
    detect, detect_all, AxisAlignedRect, Circle, Collider, EntityId, Mass, NoOpStepObserver,
    PhysicsConfig, Placed, Vec2, World,
};

fn circle(r: f32) -> Circle<f32> {
    Circle::new(r).unwrap()
}

fn rect(hw: f32, hh: f32) -> AxisAlignedRect<f32> {
    AxisAlignedRect::new(hw, hh).unwrap()
}

#[test]
fn overlapping_circles_split_the_correction() {
    let config: PhysicsConfig<f32> = PhysicsConfig::new();
    let mut world = World::new();
    let a = world
        .spawn_dynamic(Vec2::new(0.0, 0.0), Collider::circle(10.0).unwrap(), Mass::Finite(1.0), &config)
        .unwrap();
    let b = world
        .spawn_dynamic(Vec2::new(15.0, 0.0), Collider::circle(10.0).unwrap(), Mass::Finite(1.0), &config)
        .unwrap();

    world.step(1.0 / 60.0, &config, &mut NoOpStepObserver);

    let contact = world.contacts().between(a, b).unwrap();
    assert_eq!(contact.first, a);
    assert_eq!(contact.second, b);
    assert_relative_eq!(contact.depth, 5.0);
    assert_relative_eq!(contact.normal.x, 1.0);
    assert_relative_eq!(contact.normal.y, 0.0);

    assert_relative_eq!(world.position(a).unwrap().x, -2.5);
    assert_relative_eq!(world.position(b).unwrap().x, 17.5);
    assert_eq!(world.contacts().len(), 1);
}

#[test]
fn touching_circles_do_not_collide() {
    assert!(circle_circle(Vec2::new(0.0, 0.0), &circle(10.0), Vec2::new(20.0, 0.0), &circle(10.0)).is_none());
    assert!(circle_circle(Vec2::new(0.0, 0.0), &circle(10.0), Vec2::new(25.0, 0.0), &circle(10.0)).is_none());
}

#[test]
fn coincident_circles_separate_vertically() {
    let p = circle_circle(Vec2::new(3.0, 3.0), &circle(4.0), Vec2::new(3.0, 3.0), &circle(6.0)).unwrap();
    assert_eq!(p.normal, Vec2::new(0.0, 1.0));
    assert_relative_eq!(p.depth, 10.0);
}

#[test]
fn circle_outside_rect_uses_closest_point() {
    // Circle just above the rect's top edge (y grows downward).
    let p = circle_rect(Vec2::new(0.0, -23.0), &circle(5.0), Vec2::new(0.0, 0.0), &rect(20.0, 20.0)).unwrap();
    assert_relative_eq!(p.normal.x, 0.0);
    assert_relative_eq!(p.normal.y, 1.0);
    assert_relative_eq!(p.depth, 2.0);

    assert!(circle_rect(Vec2::new(0.0, -25.0), &circle(5.0), Vec2::new(0.0, 0.0), &rect(20.0, 20.0)).is_none());
}

#[test]
fn circle_near_rect_corner() {
    let p = circle_rect(Vec2::new(22.4, 23.2), &circle(5.0), Vec2::new(0.0, 0.0), &rect(20.0, 20.0)).unwrap();
    assert_relative_eq!(p.normal.x, -0.6, epsilon = 1e-5);
    assert_relative_eq!(p.normal.y, -0.8, epsilon = 1e-5);
    assert_relative_eq!(p.depth, 1.0, epsilon = 1e-5);

    // Exactly one radius from the corner.
    assert!(circle_rect(Vec2::new(23.0, 24.0), &circle(5.0), Vec2::new(0.0, 0.0), &rect(20.0, 20.0)).is_none());
}

#[test]
fn circle_inside_rect_leaves_along_least_penetration() {
    let r = rect(20.0, 20.0);
    let centre = Vec2::new(100.0, 100.0);

    let p = circle_rect(Vec2::new(100.0, 100.0), &circle(5.0), centre, &r).unwrap();
    assert_eq!(p.normal, Vec2::new(-1.0, 0.0));
    assert_relative_eq!(p.depth, 25.0);

    let p = circle_rect(Vec2::new(105.0, 100.0), &circle(5.0), centre, &r).unwrap();
    assert_eq!(p.normal, Vec2::new(-1.0, 0.0));
    assert_relative_eq!(p.depth, 20.0);

    let p = circle_rect(Vec2::new(101.0, 88.0), &circle(5.0), centre, &r).unwrap();
    assert_eq!(p.normal, Vec2::new(0.0, 1.0));
    assert_relative_eq!(p.depth, 13.0);
}

#[test]
fn circle_inside_rect_is_pushed_clear_in_one_step() {
    let config: PhysicsConfig<f32> = PhysicsConfig::new();
    let mut world = World::new();
    let player = world
        .spawn_dynamic(Vec2::new(105.0, 100.0), Collider::circle(5.0).unwrap(), Mass::Finite(1.0), &config)
        .unwrap();
    let wall = world.spawn_static(Vec2::new(100.0, 100.0), Collider::rect(20.0, 20.0).unwrap());

    world.step(1.0 / 60.0, &config, &mut NoOpStepObserver);

    let contact = world.contacts().between(player, wall).unwrap();
    assert!(contact.normal.x != 0.0 || contact.normal.y != 0.0);
    assert_relative_eq!(world.position(player).unwrap().x, 125.0);
    assert_relative_eq!(world.position(player).unwrap().y, 100.0);
    assert_eq!(world.position(wall), Some(Vec2::new(100.0, 100.0)));
}

#[test]
fn rect_circle_order_flips_normal() {
    let c = Collider::circle(5.0f32).unwrap();
    let r = Collider::rect(20.0, 20.0).unwrap();
    let circle_first = detect(
        &Placed::new(EntityId::new(0), Vec2::new(0.0, -23.0), &c),
        &Placed::new(EntityId::new(1), Vec2::new(0.0, 0.0), &r),
    )
    .unwrap();
    let rect_first = detect(
        &Placed::new(EntityId::new(1), Vec2::new(0.0, 0.0), &r),
        &Placed::new(EntityId::new(0), Vec2::new(0.0, -23.0), &c),
    )
    .unwrap();

    assert_eq!(rect_first.first, EntityId::new(1));
    assert_eq!(rect_first.second, EntityId::new(0));
    assert_eq!(rect_first.normal, -circle_first.normal);
    assert_eq!(rect_first.depth, circle_first.depth);
}

#[test]
fn rect_rect_picks_smaller_overlap_axis() {
    let p = rect_rect(Vec2::new(0.0, 0.0), &rect(10.0, 10.0), Vec2::new(15.0, 5.0), &rect(10.0, 10.0)).unwrap();
    assert_eq!(p.normal, Vec2::new(1.0, 0.0));
    assert_relative_eq!(p.depth, 5.0);

    let p = rect_rect(Vec2::new(0.0, 0.0), &rect(10.0, 10.0), Vec2::new(-2.0, -18.0), &rect(10.0, 10.0)).unwrap();
    assert_eq!(p.normal, Vec2::new(0.0, -1.0));
    assert_relative_eq!(p.depth, 2.0);
}

#[test]
fn rect_rect_ties_choose_x() {
    let p = rect_rect(Vec2::new(0.0, 0.0), &rect(10.0, 10.0), Vec2::new(15.0, 15.0), &rect(10.0, 10.0)).unwrap();
    assert_eq!(p.normal, Vec2::new(1.0, 0.0));
    assert_relative_eq!(p.depth, 5.0);

    let p = rect_rect(Vec2::new(0.0, 0.0), &rect(10.0, 10.0), Vec2::new(0.0, 0.0), &rect(10.0, 10.0)).unwrap();
    assert_eq!(p.normal, Vec2::new(1.0, 0.0));
    assert_relative_eq!(p.depth, 20.0);
}

#[test]
fn rect_rect_edge_contact_is_not_overlap() {
    assert!(rect_rect(Vec2::new(0.0, 0.0), &rect(10.0, 10.0), Vec2::new(20.0, 0.0), &rect(10.0, 10.0)).is_none());
    assert!(rect_rect(Vec2::new(0.0, 0.0), &rect(10.0, 10.0), Vec2::new(5.0, 20.0), &rect(10.0, 10.0)).is_none());
}

#[test]
fn detect_all_visits_pairs_in_order() {
    let shapes = [
        Collider::circle(10.0f32).unwrap(),
        Collider::circle(10.0).unwrap(),
        Collider::rect(5.0, 5.0).unwrap(),
    ];
    let placed = [
        Placed::new(EntityId::new(0), Vec2::new(0.0, 0.0), &shapes[0]),
        Placed::new(EntityId::new(1), Vec2::new(15.0, 0.0), &shapes[1]),
        Placed::new(EntityId::new(2), Vec2::new(8.0, 0.0), &shapes[2]),
    ];

    let contacts = detect_all(&placed);
    let pairs: Vec<_> = contacts.iter().map(|c| (c.first.index(), c.second.index())).collect();
    assert_eq!(pairs, vec![(0, 1), (0, 2), (1, 2)]);
    assert!(contacts.iter().all(|c| c.depth > 0.0));
}

#[test]
fn overlapping_statics_are_reported_but_never_moved() {
    let config: PhysicsConfig<f32> = PhysicsConfig::new();
    let mut world = World::new();
    let a = world.spawn_static(Vec2::new(0.0, 0.0), Collider::rect(10.0, 10.0).unwrap());
    let b = world.spawn(
        Vec2::new(5.0, 0.0),
        Some(Collider::circle(10.0).unwrap()),
        Some(tria_physics::Body::immovable()),
    );

    world.step(1.0 / 60.0, &config, &mut NoOpStepObserver);

    assert!(world.contacts().between(a, b).is_some());
    assert_eq!(world.position(a), Some(Vec2::new(0.0, 0.0)));
    assert_eq!(world.position(b), Some(Vec2::new(5.0, 0.0)));
}

#[test]
fn dynamic_body_takes_the_whole_correction_against_static() {
    let config: PhysicsConfig<f32> = PhysicsConfig::new();
    let mut world = World::new();
    let floor = world.spawn_static(Vec2::new(0.0, 30.0), Collider::rect(100.0, 20.0).unwrap());
    let crate_box = world
        .spawn_dynamic(Vec2::new(0.0, 8.0), Collider::rect(5.0, 5.0).unwrap(), Mass::Finite(3.0), &config)
        .unwrap();

    world.step(1.0 / 60.0, &config, &mut NoOpStepObserver);

    let contact = world.contacts().between(floor, crate_box).unwrap();
    assert_eq!(contact.first, floor);
    assert_eq!(contact.normal_from(crate_box), Some(Vec2::new(0.0, 1.0)));
    assert_relative_eq!(contact.depth, 3.0);
    assert_eq!(world.position(floor), Some(Vec2::new(0.0, 30.0)));
    assert_relative_eq!(world.position(crate_box).unwrap().y, 5.0);
    assert_relative_eq!(world.position(crate_box).unwrap().x, 0.0);
}
