use bencher::{HeadFixture, HeadSize};
use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use micro_htp::codec::ResponseHeadDecoder;
use std::hint::black_box;
use tokio_util::bytes::BytesMut;
use tokio_util::codec::Decoder;

static SMALL_HEAD: HeadFixture = HeadFixture::new("small.txt", include_str!("../resources/response/small.txt"), HeadSize::Small, 2);
static LARGE_HEAD: HeadFixture = HeadFixture::new("large.txt", include_str!("../resources/response/large.txt"), HeadSize::Large, 25);

fn benchmark_response_decoder(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("response_head_decoder");

    for fixture in [SMALL_HEAD, LARGE_HEAD] {
        group.throughput(Throughput::Bytes(fixture.content().len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(fixture.id()), &fixture, |b, fixture| {
            let mut decoder = ResponseHeadDecoder::new();
            b.iter_batched_ref(
                || BytesMut::from(fixture.content()),
                |bytes_mut| {
                    let tx = decoder.decode(bytes_mut).expect("input should be a valid response head").unwrap();
                    assert_eq!(tx.response_headers().len(), fixture.header_count());
                    black_box(tx);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(decoder, benchmark_response_decoder);
criterion_main!(decoder);
