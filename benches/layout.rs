use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use mindmap_layout::config::{LayoutConstants, MeasureConfig};
use mindmap_layout::ir::{Direction, MindmapEdge, MindmapNode};
use mindmap_layout::layout::{DefaultDimensions, TextDimensions, perform_complete_layout};
use std::hint::black_box;

/// Complete tree with `fanout` children per node, `depth` levels below the root.
fn wide_tree(fanout: usize, depth: usize) -> (Vec<MindmapNode>, Vec<MindmapEdge>) {
    let mut nodes = vec![MindmapNode::new("n0", "Central topic")];
    let mut edges = Vec::new();
    let mut frontier = vec![0usize];
    for _ in 0..depth {
        let mut next = Vec::new();
        for parent in frontier {
            for _ in 0..fanout {
                let id = nodes.len();
                nodes.push(MindmapNode::new(format!("n{id}"), format!("Idea number {id}")));
                edges.push(MindmapEdge::new(format!("n{parent}"), format!("n{id}")));
                next.push(id);
            }
        }
        frontier = next;
    }
    (nodes, edges)
}

/// A long spine with one leaf hanging off every spine node.
fn deep_tree(length: usize) -> (Vec<MindmapNode>, Vec<MindmapEdge>) {
    let mut nodes = vec![MindmapNode::new("n0", "Start")];
    let mut edges = Vec::new();
    for i in 1..length {
        nodes.push(MindmapNode::new(format!("n{i}"), format!("Step {i}")));
        nodes.push(MindmapNode::new(format!("l{i}"), format!("Note {i}")));
        edges.push(MindmapEdge::new(format!("n{}", i - 1), format!("n{i}")));
        edges.push(MindmapEdge::new(format!("n{i}"), format!("l{i}")));
    }
    (nodes, edges)
}

fn fixtures() -> Vec<(&'static str, (Vec<MindmapNode>, Vec<MindmapEdge>))> {
    vec![
        ("wide_small", wide_tree(4, 2)),
        ("wide_medium", wide_tree(5, 3)),
        ("wide_large", wide_tree(6, 4)),
        ("deep_medium", deep_tree(200)),
        ("deep_large", deep_tree(2000)),
    ]
}

const DIRECTIONS: [Direction; 5] = [
    Direction::LeftRight,
    Direction::RightLeft,
    Direction::TopBottom,
    Direction::BottomTop,
    Direction::Radial,
];

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    let constants = LayoutConstants::default();
    let resolver = DefaultDimensions::from_constants(&constants);
    for (name, (nodes, edges)) in fixtures() {
        for direction in DIRECTIONS {
            let id = format!("{name}_{}", direction.as_token());
            group.bench_with_input(BenchmarkId::from_parameter(id), &(&nodes, &edges), |b, data| {
                b.iter(|| {
                    let (nodes, edges) = data;
                    let layout = perform_complete_layout(
                        black_box(nodes),
                        black_box(edges),
                        "n0",
                        direction,
                        &constants,
                        &resolver,
                    );
                    black_box(layout.bounds);
                })
            });
        }
    }
    group.finish();
}

fn bench_measured_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout_measured");
    let constants = LayoutConstants::default();
    let resolver = TextDimensions::new(MeasureConfig {
        fast_text_metrics: true,
        ..MeasureConfig::default()
    });
    let (nodes, edges) = wide_tree(5, 3);
    for direction in DIRECTIONS {
        group.bench_with_input(
            BenchmarkId::from_parameter(direction.as_token()),
            &(&nodes, &edges),
            |b, data| {
                b.iter(|| {
                    let (nodes, edges) = data;
                    let layout = perform_complete_layout(
                        black_box(nodes),
                        black_box(edges),
                        "n0",
                        direction,
                        &constants,
                        &resolver,
                    );
                    black_box(layout.bounds);
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_layout, bench_measured_layout);
criterion_main!(benches);
