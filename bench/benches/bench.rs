use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rfc3986_uri::{class::QUERY, pct_enc, CharPolicy, Uri};

criterion_group!(
    benches,
    bench_parse,
    bench_parse_reject,
    bench_to_string,
    bench_build,
    bench_enc,
    bench_dec,
);
criterion_main!(benches);

const PARSE_CASE: &str = "https://user@example.com:8080/search?q=%E6%B5%8B%E8%AF%95#fragment";
const ENC_CASE: &str = "te😃a 测1`~!@试#$%st^&+=";
const DEC_CASE: &str = "te%F0%9F%98%83a%20%E6%B5%8B1%60~!@%E8%AF%95%23$%25st%5E&+=";

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse", |b| b.iter(|| Uri::parse(black_box(PARSE_CASE))));
}

fn bench_parse_reject(c: &mut Criterion) {
    c.bench_function("parse_reject", |b| {
        b.iter(|| Uri::parse_with(black_box(PARSE_CASE), CharPolicy::Reject))
    });
}

fn bench_to_string(c: &mut Criterion) {
    let uri = Uri::parse(PARSE_CASE).unwrap();
    c.bench_function("to_string", |b| b.iter(|| black_box(&uri).to_string()));
}

fn bench_build(c: &mut Criterion) {
    c.bench_function("build", |b| {
        b.iter(|| {
            Uri::builder()
                .scheme("foo")
                .userinfo("user")
                .host("example.com")
                .port(8042)
                .path("/over/there")
                .query("name=ferret")
                .fragment("nose")
                .build()
        })
    });
}

fn bench_enc(c: &mut Criterion) {
    c.bench_function("enc", |b| b.iter(|| pct_enc::encode(black_box(ENC_CASE), QUERY)));
}

fn bench_dec(c: &mut Criterion) {
    c.bench_function("dec", |b| {
        b.iter(|| pct_enc::decode(black_box(DEC_CASE)).to_bytes())
    });
}
