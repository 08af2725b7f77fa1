use drawing_core::geometry::Point2;
use drawing_core::shape::{Shape, ShapeBase, ShapeType, kind_of};
use drawing_core::shapes::{Circle, Rectangle, Square, Text};
use drawing_engine::FactoryError;
use drawing_io::{
    GraphicsDoc, Registries, ensure_global_registration, global_rw_factory,
    global_shape_factory, register_kind, rw::CircleReaderWriter, rw::SquareReaderWriter,
};

#[test]
fn every_registered_id_builds_its_own_kind() {
    ensure_global_registration();
    let shapes = global_shape_factory().read();
    let rws = global_rw_factory().read();
    for id in shapes.keys() {
        let shape = shapes.create(id).expect("registered id");
        assert_eq!(shape.kind().to_string(), *id);
        assert!(rws.create(&shape.kind()).is_ok(), "missing rw for {id}");
    }
    assert!(shapes.contains(&"Rectangle".to_string()));
    assert_eq!(
        shapes.create(&"Rectangle".to_string()).unwrap().kind(),
        kind_of::<Rectangle>()
    );
}

#[test]
fn document_works_with_global_registries() {
    ensure_global_registration();
    let shapes = global_shape_factory().read();
    let rws = global_rw_factory().read();

    let mut doc = GraphicsDoc::new(&shapes, &rws);
    doc.load_from_str("Text 3 4 hello\nSquare 1 1 2").unwrap();
    assert_eq!(doc.len(), 2);
    assert_eq!(doc.to_text().unwrap(), "Text 3 4 hello\nSquare 1 1 2\n");
}

#[test]
fn duplicate_id_keeps_first_kind() {
    let mut registries = Registries::new();
    let first =
        register_kind::<Square, SquareReaderWriter>(&mut registries.shapes, &mut registries.rws);
    assert!(first.is_complete());

    // 不同种类抢占同一 id：第二次注册失败，id 仍构造第一个种类。
    let clash = registries.shapes.register(
        Square::KIND.id().to_string(),
        Box::new(|| -> Box<dyn Shape> { Box::new(Circle::default()) }),
    );
    assert!(!clash);
    let built = registries.shapes.create(&"Square".to_string()).unwrap();
    assert_eq!(built.kind(), kind_of::<Square>());

    let again =
        register_kind::<Circle, CircleReaderWriter>(&mut registries.shapes, &mut registries.rws);
    assert!(again.is_complete());
}

#[test]
fn unregistered_kind_has_no_reader_writer() {
    let registries = Registries::new();
    let err = registries
        .rws
        .create(&kind_of::<Text>())
        .err()
        .expect("no reader-writer registered");
    assert_eq!(
        err,
        FactoryError::UnknownKey {
            key: "Text".to_string()
        }
    );

    let mut doc = registries.document();
    doc.add(Box::new(Text::new(Point2::new(0.0, 0.0), "x")));
    assert_eq!(doc.len(), 1);
}
