//! The static demo catalog.

use std::sync::OnceLock;

use crate::catalog::{Product, Rating};
use crate::money::Money;

static CATALOG: OnceLock<Vec<Product>> = OnceLock::new();

fn catalog() -> &'static [Product] {
    CATALOG.get_or_init(build_catalog)
}

/// All products in the catalog, in catalog order.
pub fn products() -> Vec<Product> {
    catalog().to_vec()
}

/// The category names, in display order.
pub fn categories() -> Vec<String> {
    ["electronics", "men's clothing", "women's clothing"]
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Look up a single product by id.
pub fn find_product(id: u32) -> Option<&'static Product> {
    catalog().iter().find(|p| p.id == id)
}

fn product(
    id: u32,
    title: &str,
    price_cents: i64,
    description: &str,
    category: &str,
    image: &str,
    rate: f64,
    count: u32,
) -> Product {
    Product {
        id,
        title: title.to_string(),
        price: Money::new(price_cents),
        description: description.to_string(),
        category: category.to_string(),
        image: image.to_string(),
        rating: Rating { rate, count },
    }
}

fn build_catalog() -> Vec<Product> {
    vec![
        product(
            1,
            "iPhone 15 Pro Max - 256GB",
            119999,
            "El iPhone más avanzado con chip A17 Pro, cámara ProRAW y pantalla Super Retina XDR de 6.7 pulgadas.",
            "electronics",
            "https://images.unsplash.com/photo-1592750475338-74b7b21085ab?w=400",
            4.8,
            324,
        ),
        product(
            2,
            "Samsung Galaxy S24 Ultra",
            109999,
            "Smartphone premium con S Pen integrado, cámara de 200MP y pantalla Dynamic AMOLED 2X.",
            "electronics",
            "https://images.unsplash.com/photo-1610945265064-0e34e5519bbf?w=400",
            4.7,
            289,
        ),
        product(
            3,
            "Camiseta Premium Algodón",
            2999,
            "Camiseta 100% algodón orgánico, cómoda y duradera. Disponible en múltiples colores.",
            "men's clothing",
            "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?w=400",
            4.5,
            156,
        ),
        product(
            4,
            "Vestido Elegante de Verano",
            4999,
            "Vestido flojo y cómodo perfecto para el verano. Diseño moderno y elegante.",
            "women's clothing",
            "https://images.unsplash.com/photo-1595777457583-95e059d581b8?w=400",
            4.6,
            203,
        ),
        product(
            5,
            "MacBook Pro 16 pulgadas M3",
            249999,
            "Potente laptop profesional con chip Apple M3, 16GB RAM y SSD de 512GB.",
            "electronics",
            "https://images.unsplash.com/photo-1541807084-5c52b6b3adef?w=400",
            4.9,
            445,
        ),
        product(
            6,
            "Auriculares Sony WH-1000XM5",
            39999,
            "Auriculares inalámbricos con cancelación de ruido líder y sonido Hi-Res.",
            "electronics",
            "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=400",
            4.8,
            567,
        ),
        product(
            7,
            "Chaqueta Denim Clásica",
            7999,
            "Chaqueta denim resistente y atemporal. Ideal para todas las temporadas.",
            "men's clothing",
            "https://images.unsplash.com/photo-1551028719-00167b16eac5?w=400",
            4.4,
            178,
        ),
        product(
            8,
            "Bolso de Mano de Cuero",
            8999,
            "Bolso elegante de cuero genuino con múltiples compartimentos y diseño sofisticado.",
            "women's clothing",
            "https://images.unsplash.com/photo-1590874103328-eac38a683ce7?w=400",
            4.7,
            234,
        ),
        product(
            9,
            "Zapatillas Running Nike Air Max",
            12999,
            "Zapatillas deportivas de alto rendimiento con tecnología Air Max para máximo confort.",
            "men's clothing",
            "https://images.unsplash.com/photo-1542291026-7eec264c27ff?w=400",
            4.6,
            312,
        ),
        product(
            10,
            "Reloj Inteligente Apple Watch Series 9",
            42999,
            "Smartwatch con monitor de salud avanzado, GPS integrado y resistencia al agua.",
            "electronics",
            "https://images.unsplash.com/photo-1434493789847-2f02dc6ca35d?w=400",
            4.7,
            423,
        ),
        product(
            11,
            "Falda Plisada Midi",
            3999,
            "Falda elegante plisada perfecta para oficina o ocasiones especiales.",
            "women's clothing",
            "https://images.unsplash.com/photo-1583496661160-fb588837bf93?w=400",
            4.5,
            145,
        ),
        product(
            12,
            "Tablet iPad Air 11 pulgadas",
            59999,
            "Tablet versátil con chip M2, pantalla Liquid Retina y compatibilidad con Apple Pencil.",
            "electronics",
            "https://images.unsplash.com/photo-1544244015-0df4b3ffc6b0?w=400",
            4.8,
            267,
        ),
        product(
            13,
            "Pantalones Chinos Clásicos",
            5999,
            "Pantalones chinos de corte clásico, cómodos y versátiles para cualquier ocasión.",
            "men's clothing",
            "https://images.unsplash.com/photo-1473966968600-fa801b869a1a?w=400",
            4.3,
            198,
        ),
        product(
            14,
            "Blazer Formal de Oficina",
            11999,
            "Blazer elegante y profesional, perfecto para reuniones de negocios y eventos formales.",
            "women's clothing",
            "https://images.unsplash.com/photo-1591047135029-9c2c9a63c97b?w=400",
            4.6,
            176,
        ),
        product(
            15,
            "Cámara Canon EOS R6",
            249999,
            "Cámara mirrorless profesional con sensor full-frame y grabación 4K.",
            "electronics",
            "https://images.unsplash.com/photo-1606983340126-99ab4feaa64a?w=400",
            4.9,
            89,
        ),
        product(
            16,
            "Jeans Slim Fit Premium",
            6999,
            "Jeans de corte slim con stretch para mayor comodidad y estilo moderno.",
            "men's clothing",
            "https://images.unsplash.com/photo-1582418702059-97ebaf932f11?w=400",
            4.4,
            223,
        ),
        product(
            17,
            "Blusa de Seda Premium",
            5499,
            "Blusa elegante de seda natural, suave al tacto y perfecta para ocasiones especiales.",
            "women's clothing",
            "https://images.unsplash.com/photo-1594633313593-bab3825d0caf?w=400",
            4.7,
            189,
        ),
        product(
            18,
            "PlayStation 5",
            49999,
            "Consola de última generación con procesador AMD Ryzen Zen 2 y GPU RDNA 2.",
            "electronics",
            "https://images.unsplash.com/photo-1606813907291-d86efa9b94db?w=400",
            4.9,
            678,
        ),
        product(
            19,
            "Chaqueta Cortavientos Deportiva",
            6499,
            "Chaqueta resistente al viento y agua, ideal para actividades al aire libre.",
            "men's clothing",
            "https://images.unsplash.com/photo-1551488831-00ddcb6c6bd3?w=400",
            4.5,
            167,
        ),
        product(
            20,
            "Botas Anchas de Cuero",
            14999,
            "Botas elegantes de cuero genuino con suela antideslizante y diseño moderno.",
            "women's clothing",
            "https://images.unsplash.com/photo-1608256246200-53bd35f3f44e?w=400",
            4.6,
            211,
        ),
    ]
}
