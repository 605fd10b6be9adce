//! 目錄快照
//!
//! 引擎的所有入口都以唯讀快照方式注入目錄資料，
//! 不依賴任何全域資料庫句柄；只有領料作業會透過
//! 可變引用修改庫存計數。

use serde::{Deserialize, Serialize};

use crate::item::{Accessory, Material, StockRow, Supplier, Warehouse};
use crate::product::{
    AccessoryRequirement, AssemblyComponent, MaterialRequirement, OperationSpec, Product,
};

/// 目錄快照：產品、規格、物料、配件、供應商與倉庫庫存
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    /// 產品主檔
    pub products: Vec<Product>,

    /// 裝配規格（父 -> 子）
    pub assemblies: Vec<AssemblyComponent>,

    /// 物料規格
    pub material_requirements: Vec<MaterialRequirement>,

    /// 配件規格
    pub accessory_requirements: Vec<AccessoryRequirement>,

    /// 工序規格
    pub operations: Vec<OperationSpec>,

    /// 物料主檔
    pub materials: Vec<Material>,

    /// 配件主檔
    pub accessories: Vec<Accessory>,

    /// 供應商主檔
    pub suppliers: Vec<Supplier>,

    /// 倉庫主檔
    pub warehouses: Vec<Warehouse>,

    /// 物料倉庫明細（恆依貨號、倉庫ID排序）
    pub material_stock: Vec<StockRow>,

    /// 配件倉庫明細（恆依貨號、倉庫ID排序）
    pub accessory_stock: Vec<StockRow>,
}

impl Catalog {
    /// 創建空目錄
    pub fn new() -> Self {
        Self::default()
    }

    /// 加入產品
    pub fn add_product(&mut self, product: Product) {
        self.products.push(product);
    }

    /// 加入裝配規格
    pub fn add_assembly(&mut self, component: AssemblyComponent) {
        self.assemblies.push(component);
    }

    /// 加入物料規格
    pub fn add_material_requirement(&mut self, requirement: MaterialRequirement) {
        self.material_requirements.push(requirement);
    }

    /// 加入配件規格
    pub fn add_accessory_requirement(&mut self, requirement: AccessoryRequirement) {
        self.accessory_requirements.push(requirement);
    }

    /// 加入工序規格
    pub fn add_operation(&mut self, operation: OperationSpec) {
        self.operations.push(operation);
    }

    /// 加入物料主檔
    pub fn add_material(&mut self, material: Material) {
        self.materials.push(material);
    }

    /// 加入配件主檔
    pub fn add_accessory(&mut self, accessory: Accessory) {
        self.accessories.push(accessory);
    }

    /// 加入供應商
    pub fn add_supplier(&mut self, supplier: Supplier) {
        self.suppliers.push(supplier);
    }

    /// 加入倉庫
    pub fn add_warehouse(&mut self, warehouse: Warehouse) {
        self.warehouses.push(warehouse);
    }

    /// 加入物料倉庫明細（維持排序不變量）
    pub fn add_material_stock(&mut self, row: StockRow) {
        self.material_stock.push(row);
        self.material_stock
            .sort_by(|a, b| (&a.article, a.warehouse_id).cmp(&(&b.article, b.warehouse_id)));
    }

    /// 加入配件倉庫明細（維持排序不變量）
    pub fn add_accessory_stock(&mut self, row: StockRow) {
        self.accessory_stock.push(row);
        self.accessory_stock
            .sort_by(|a, b| (&a.article, a.warehouse_id).cmp(&(&b.article, b.warehouse_id)));
    }

    /// 查找產品
    pub fn product(&self, product_id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == product_id)
    }

    /// 取得某產品的裝配規格
    pub fn assembly_components(&self, product_id: &str) -> Vec<&AssemblyComponent> {
        self.assemblies
            .iter()
            .filter(|a| a.product_id == product_id)
            .collect()
    }

    /// 取得某產品的物料規格
    pub fn material_requirements_of(&self, product_id: &str) -> Vec<&MaterialRequirement> {
        self.material_requirements
            .iter()
            .filter(|m| m.product_id == product_id)
            .collect()
    }

    /// 取得某產品的配件規格
    pub fn accessory_requirements_of(&self, product_id: &str) -> Vec<&AccessoryRequirement> {
        self.accessory_requirements
            .iter()
            .filter(|a| a.product_id == product_id)
            .collect()
    }

    /// 取得某產品的工序規格（依工序順序號排序）
    pub fn operation_specs(&self, product_id: &str) -> Vec<&OperationSpec> {
        let mut specs: Vec<&OperationSpec> = self
            .operations
            .iter()
            .filter(|o| o.product_id == product_id)
            .collect();
        specs.sort_by_key(|o| o.number);
        specs
    }

    /// 查找物料主檔
    pub fn material(&self, article: &str) -> Option<&Material> {
        self.materials.iter().find(|m| m.article == article)
    }

    /// 查找物料主檔（可變）
    pub fn material_mut(&mut self, article: &str) -> Option<&mut Material> {
        self.materials.iter_mut().find(|m| m.article == article)
    }

    /// 查找配件主檔
    pub fn accessory(&self, article: &str) -> Option<&Accessory> {
        self.accessories.iter().find(|a| a.article == article)
    }

    /// 查找配件主檔（可變）
    pub fn accessory_mut(&mut self, article: &str) -> Option<&mut Accessory> {
        self.accessories.iter_mut().find(|a| a.article == article)
    }

    /// 查找供應商
    pub fn supplier(&self, name: &str) -> Option<&Supplier> {
        self.suppliers.iter().find(|s| s.name == name)
    }

    /// 某物料的倉庫明細（依倉庫ID升冪）
    pub fn material_stock_rows(&self, article: &str) -> Vec<&StockRow> {
        self.material_stock
            .iter()
            .filter(|r| r.article == article)
            .collect()
    }

    /// 某物料的倉庫明細（可變，依倉庫ID升冪）
    pub fn material_stock_rows_mut(
        &mut self,
        article: &str,
    ) -> impl Iterator<Item = &mut StockRow> {
        let article = article.to_string();
        self.material_stock
            .iter_mut()
            .filter(move |r| r.article == article)
    }

    /// 某物料的倉庫可用量合計（忽略總帳現有量）
    pub fn material_stock_total(&self, article: &str) -> i64 {
        self.material_stock
            .iter()
            .filter(|r| r.article == article)
            .map(|r| r.quantity)
            .sum()
    }

    /// 某配件的倉庫明細（依倉庫ID升冪）
    pub fn accessory_stock_rows(&self, article: &str) -> Vec<&StockRow> {
        self.accessory_stock
            .iter()
            .filter(|r| r.article == article)
            .collect()
    }

    /// 某配件的倉庫明細（可變，依倉庫ID升冪）
    pub fn accessory_stock_rows_mut(
        &mut self,
        article: &str,
    ) -> impl Iterator<Item = &mut StockRow> {
        let article = article.to_string();
        self.accessory_stock
            .iter_mut()
            .filter(move |r| r.article == article)
    }

    /// 某配件的倉庫可用量合計（忽略總帳現有量）
    pub fn accessory_stock_total(&self, article: &str) -> i64 {
        self.accessory_stock
            .iter()
            .filter(|r| r.article == article)
            .map(|r| r.quantity)
            .sum()
    }
}
