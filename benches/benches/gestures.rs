// Copyright 2025 the Gesture Frame Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for gesture routing and per-frame coalescing in `gesture_frame`.

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Size, Vec2};

use gesture_frame::{ElementHost, EventSource, GestureFrame, GestureOptions};
use gesture_frame_input::{InputEvent, Modifiers, PointerInput, WheelInput};
use gesture_frame_timing::{FrameId, FrameQueue, FrameScheduler};
use gesture_frame_view::{AncestorStyle, ContainerLayout, FrameHost};

/// Host that keeps just enough layout state for the store to work against.
#[derive(Debug)]
struct BenchHost {
    frames: FrameQueue,
    styles: Vec<String>,
    scroll: Vec2,
    layout: ContainerLayout,
}

impl BenchHost {
    fn new(depth: usize) -> Self {
        Self {
            frames: FrameQueue::new(),
            styles: (0..depth)
                .map(|i| {
                    if i == 0 {
                        "matrix(1.25, 0, 0, 1.25, 0, 0)".to_string()
                    } else {
                        "none".to_string()
                    }
                })
                .collect(),
            scroll: Vec2::ZERO,
            layout: ContainerLayout::default(),
        }
    }
}

impl FrameScheduler for BenchHost {
    fn request_frame(&mut self) -> FrameId {
        self.frames.request_frame()
    }

    fn cancel_frame(&mut self, id: FrameId) {
        self.frames.cancel_frame(id);
    }
}

impl FrameHost for BenchHost {
    fn ancestor_styles(&self) -> impl Iterator<Item = AncestorStyle<'_>> + '_ {
        self.styles.iter().map(|s| AncestorStyle::new(s))
    }

    fn client_size(&self) -> Size {
        Size::new(800.0, 600.0)
    }

    fn bounding_client_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, 1000.0, 750.0)
    }

    fn top_left_client(&self) -> Point {
        (self.layout.margin - self.scroll).to_point()
    }

    fn content_size(&self) -> Option<Size> {
        Some(Size::new(2000.0, 1500.0))
    }

    fn scroll_position(&self) -> Vec2 {
        self.scroll
    }

    fn scroll_to(&mut self, position: Point) {
        self.scroll = position.to_vec2();
    }

    fn set_content_scale(&mut self, scale: f64) {
        black_box(scale);
    }

    fn set_container_layout(&mut self, layout: ContainerLayout) {
        self.layout = layout;
    }
}

impl ElementHost for BenchHost {
    fn set_attribute(&mut self, name: &str, value: Option<&str>) {
        black_box((name, value));
    }

    fn bind_event_source(&mut self, _source: EventSource) {}

    fn set_root_pointer_listeners(&mut self, _enabled: bool) {}

    fn capture_pointer(&mut self, _pointer: u64) {}

    fn suppress_context_menu(&mut self, _enabled: bool) {}

    fn observe_resize(&mut self, _enabled: bool) {}
}

fn interactive_frame(depth: usize) -> GestureFrame<BenchHost> {
    let mut frame = GestureFrame::with_options(BenchHost::new(depth), GestureOptions::interactive());
    frame.attach();
    frame
}

fn run_frames(frame: &mut GestureFrame<BenchHost>) -> usize {
    let due = frame.host_mut().frames.take_due();
    due.into_iter()
        .filter(|id| frame.on_animation_frame(*id))
        .count()
}

fn bench_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag");
    for &moves in &[1_u32, 8, 64] {
        group.bench_with_input(BenchmarkId::new("moves_per_frame", moves), &moves, |b, &moves| {
            b.iter_batched(
                || {
                    let mut frame = interactive_frame(8);
                    let down = PointerInput::mouse(1, Point::new(400.0, 300.0));
                    frame.handle_event(InputEvent::PointerDown(down));
                    frame
                },
                |mut frame| {
                    for i in 0..moves {
                        let step = f64::from(i);
                        let moved = PointerInput::mouse(1, Point::new(400.0 + step, 300.0 - step));
                        frame.handle_event(InputEvent::PointerMove(moved));
                    }
                    black_box(run_frames(&mut frame));
                    frame
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_wheel(c: &mut Criterion) {
    let mut group = c.benchmark_group("wheel");
    for &depth in &[1_usize, 16, 64] {
        group.bench_with_input(BenchmarkId::new("ancestor_depth", depth), &depth, |b, &depth| {
            let mut frame = interactive_frame(depth);
            let mut dy = 1.0;
            b.iter(|| {
                dy = -dy;
                frame.handle_event(InputEvent::Wheel(WheelInput {
                    delta: Vec2::new(0.0, dy),
                    position: Point::new(500.0, 375.0),
                    modifiers: Modifiers::CTRL,
                }));
                black_box(run_frames(&mut frame))
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_drag, bench_wheel);
criterion_main!(benches);
