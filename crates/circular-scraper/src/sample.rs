/// Three-tile circular page used by `--test` runs and the end-to-end tests.
pub const SAMPLE_MARKUP: &str = r#"<html>
<body>
    <div class="circular-item" data-testid="circular-item">
        <h3 class="product-name">Organic Avocados</h3>
        <span class="price">$1.49</span>
        <span class="size">each</span>
    </div>
    <div class="circular-item" data-testid="circular-item">
        <h3 class="product-name">Ground Beef 80/20</h3>
        <span class="price">$3.99</span>
        <span class="size">per lb</span>
    </div>
    <div class="circular-item" data-testid="circular-item">
        <h3 class="product-name">Tide Laundry Detergent</h3>
        <span class="price">2 for $10</span>
        <span class="size">100 oz</span>
    </div>
</body>
</html>
"#;
