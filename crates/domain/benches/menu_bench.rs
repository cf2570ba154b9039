use criterion::{Criterion, criterion_group, criterion_main};
use domain::{ItemChanges, Menu, MenuService, SetAvailability, UpdateItem, sample_menu};
use manifest_store::{FileManifestStore, InMemoryManifestStore};

fn bench_validate(c: &mut Criterion) {
    let menu = sample_menu();
    let document = menu.to_document().unwrap();

    c.bench_function("domain/validate_menu", |b| {
        b.iter(|| menu.validate().unwrap());
    });

    c.bench_function("domain/parse_document", |b| {
        b.iter(|| Menu::from_document(document.clone()).unwrap());
    });
}

fn bench_update_item_in_memory(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let service = MenuService::new(InMemoryManifestStore::new());
    rt.block_on(async { service.load().await.unwrap() });

    c.bench_function("domain/update_item_memory", |b| {
        b.iter(|| {
            rt.block_on(async {
                service
                    .update_item(UpdateItem::new("latte", ItemChanges::new().price(5.25)))
                    .await
                    .unwrap();
            });
        });
    });
}

fn bench_set_availability_on_disk(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let service = MenuService::new(FileManifestStore::new(dir.path().join("menu.json")));
    rt.block_on(async { service.load().await.unwrap() });

    c.bench_function("domain/set_availability_file", |b| {
        b.iter(|| {
            rt.block_on(async {
                service
                    .set_availability(SetAvailability::clear("fries"))
                    .await
                    .unwrap();
            });
        });
    });
}

criterion_group!(
    benches,
    bench_validate,
    bench_update_item_in_memory,
    bench_set_availability_on_disk
);
criterion_main!(benches);
