use std::time::Duration;

use const_format::concatcp;
use criterion::{measurement::Measurement, BenchmarkGroup, Criterion};
use crossword_generator::{
	catalog::WordCatalog,
	crossword::Crossword,
	generator::{generate_best, Generator}
};

/// The path of the directory containing the word lists.
#[inline]
#[must_use]
const fn dir() -> &'static str
{
	"words"
}

/// The name of the word list.
#[inline]
#[must_use]
const fn name() -> &'static str
{
	"animals"
}

/// The path to the word list.
#[inline]
#[must_use]
const fn path_json() -> &'static str
{
	concatcp!(dir(), "/", name(), ".json")
}

/// Benchmark reading a word list from a file.
///
/// # Arguments
///
/// * `g` - The benchmark group.
fn bench_read_from_file<M: Measurement>(g: &mut BenchmarkGroup<M>)
{
	g.bench_function("read_from_file", |b| {
		b.iter(|| WordCatalog::read_from_file(path_json()).unwrap());
	});
}

/// Benchmark a single generation run on a 20×20 board.
///
/// # Arguments
///
/// * `g` - The benchmark group.
/// * `catalog` - The candidate words.
fn bench_generate<M: Measurement>(
	g: &mut BenchmarkGroup<M>,
	catalog: &WordCatalog
) {
	g.bench_function("generate", |b| {
		b.iter(|| Generator::new(20, 20, catalog.clone()).generate(0, 2));
	});
}

/// Benchmark trying every word as the seed on a cramped board.
///
/// # Arguments
///
/// * `g` - The benchmark group.
/// * `catalog` - The candidate words.
fn bench_generate_best<M: Measurement>(
	g: &mut BenchmarkGroup<M>,
	catalog: &WordCatalog
) {
	g.bench_function("generate_best", |b| {
		b.iter(|| generate_best(12, 12, catalog, catalog.len(), 3));
	});
}

/// Benchmark saving and loading a game file.
///
/// # Arguments
///
/// * `g` - The benchmark group.
/// * `catalog` - The candidate words.
fn bench_round_trip<M: Measurement>(
	g: &mut BenchmarkGroup<M>,
	catalog: &WordCatalog
) {
	let crossword = Generator::new(20, 20, catalog.clone()).generate(0, 2);
	let file = tempfile::NamedTempFile::new().unwrap();
	g.bench_function("round_trip", |b| {
		b.iter(|| {
			crossword.serialize_to_file(file.path()).unwrap();
			Crossword::deserialize_from_file(file.path()).unwrap()
		});
	});
}

/// Run all benchmarks.
fn main()
{
	let catalog = WordCatalog::read_from_file(path_json()).unwrap();

	// Run the benchmarks.
	let mut criterion = Criterion::default().configure_from_args();
	let mut group = criterion.benchmark_group("benchmarks");
	group.measurement_time(Duration::from_secs(10));
	bench_read_from_file(&mut group);
	bench_generate(&mut group, &catalog);
	bench_generate_best(&mut group, &catalog);
	bench_round_trip(&mut group, &catalog);
	group.finish();

	// Generate the final summary.
	criterion.final_summary();
}
