use criterion::{black_box, criterion_group, criterion_main, Criterion};
use chardetx_core::DetectorBuilder;
use chardetx_dsa::{models, CodingStateMachine};

fn state_machine_throughput(c: &mut Criterion) {
    let text = "Grüße aus Köln, 中文字符 и немного кириллицы. ".repeat(64);
    let bytes = text.as_bytes();

    c.bench_function("utf8_state_machine_4k", |b| {
        b.iter(|| {
            let mut machine = CodingStateMachine::new(&models::UTF8);
            for &byte in black_box(bytes) {
                machine.next_state(byte);
            }
            machine.current_state()
        })
    });
}

fn detector_throughput(c: &mut Criterion) {
    let latin = b"Caf\xE9 na\xEFve gar\xE7on r\xE9sum\xE9, d\xE9j\xE0 vu. ".repeat(128);
    let ascii = b"plain seven bit text without anything unusual in it. ".repeat(128);
    let builder = DetectorBuilder::new();

    c.bench_function("detect_latin1_6k", |b| {
        b.iter(|| {
            let mut detector = builder.build();
            detector.feed(black_box(&latin));
            detector.data_end();
            detector.code_page()
        })
    });

    c.bench_function("detect_ascii_6k", |b| {
        b.iter(|| {
            let mut detector = builder.build();
            detector.feed(black_box(&ascii));
            detector.data_end();
            detector.code_page()
        })
    });

    let mut reused = builder.build();
    c.bench_function("detect_latin1_6k_reset", |b| {
        b.iter(|| {
            reused.reset();
            reused.feed(black_box(&latin));
            reused.data_end();
            reused.code_page()
        })
    });
}

criterion_group!(benches, state_machine_throughput, detector_throughput);
criterion_main!(benches);
