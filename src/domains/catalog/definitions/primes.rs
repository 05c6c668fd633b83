//! Primes (ERP) documentation.

use super::{NamespaceDefinition, TopicDefinition};
use crate::domains::catalog::identifier::Namespace;

/// Primes namespace definition.
pub struct PrimesDocs;

impl NamespaceDefinition for PrimesDocs {
    const NAMESPACE: Namespace = Namespace::Primes;
    const NOT_FOUND: &'static str = "Primes 프로젝트 정보를 찾을 수 없습니다.";

    fn topics() -> Vec<TopicDefinition> {
        vec![
            TopicDefinition {
                topic: "overview",
                title: "Primes 프로젝트 개요",
                description: "ERP 시스템 - Radix UI + Tailwind CSS",
                tool_name: "get_primes_overview",
                template: OVERVIEW,
            },
            TopicDefinition {
                topic: "patterns",
                title: "Primes 개발 패턴",
                description: "아키텍처, UI 컴포넌트, Hook 패턴",
                tool_name: "get_primes_patterns",
                template: PATTERNS,
            },
            TopicDefinition {
                topic: "templates",
                title: "Primes 템플릿 시스템",
                description: "SinglePage, MasterDetailPage, TabNavigation",
                tool_name: "get_primes_templates",
                template: TEMPLATES,
            },
            TopicDefinition {
                topic: "domains",
                title: "Primes 솔루션 도메인",
                description: "ini, sales, purchase, production, machine, mold, quality",
                tool_name: "get_primes_domains",
                template: DOMAINS,
            },
            TopicDefinition {
                topic: "swagger",
                title: "Primes Swagger API",
                description: "실제 Swagger URL 및 API 정보",
                tool_name: "get_primes_swagger",
                template: SWAGGER,
            },
        ]
    }
}

const OVERVIEW: &str = r#"# 🎯 Primes 프로젝트 개요

## 📋 **프로젝트 설명**
Primes는 현대적인 기업용 ERP 시스템으로, React 18 + TypeScript + Radix UI를 기반으로 구축된 고품질 웹 애플리케이션입니다.

## 🏗️ **기술 스택**
- **Frontend**: React 18.3.1 + TypeScript 5.7.2
- **UI Framework**: Radix UI + Tailwind CSS
- **State Management**: React Query (@tanstack/react-query)
- **Build Tool**: Vite 6.2.0
- **Package Manager**: pnpm

## 📊 **현재 상태**
- **완성도**: 🟢 98%
- **페이지 수**: 260개
- **Hook 수**: 422개
- **솔루션 도메인**: 7개 (ini, sales, purchase, production, machine, mold, quality)

## 🎯 **주요 특징**
- **Enhanced Template System**: SinglePage, MasterDetailPage, TabNavigation
- **Atomic Hooks**: 단일 책임 원칙의 훅 패턴
- **MCP 통합**: AI 기반 코드 생성
- **Swagger 동기화**: API 스키마 자동 동기화
- **GS 인증 준비**: 보안성, 신뢰성, 감사 추적 강화
"#;

const PATTERNS: &str = r#"# 🏗️ Primes 개발 패턴

## 🏗️ **아키텍처 패턴**
- **레이어 구조**: Presentation → Business Logic → Service → API
- **도메인 분리**: 7개 솔루션 (ini, sales, purchase, production, machine, mold, quality)
- **모듈화**: 각 도메인별 독립적 구조

## 🎨 **UI 컴포넌트 패턴**
- **Radix UI + Tailwind CSS**: 접근성과 일관성
- **Enhanced Template System**:
  - SinglePage: Modal-based CRUD with DatatableComponent
  - MasterDetailPage: Navigation-based CRUD with relationships
  - TabNavigation: Tab-based navigation structure
  - CustomSelect: Field API integrated select components

## 🔧 **Hook 패턴**
- **Atomic Hooks**: 단일 책임 원칙
  - useCreateEntity() - 생성 전용
  - useUpdateEntity() - 수정 전용
  - useDeleteEntity() - 삭제 전용
  - useEntityListQuery() - 목록 조회 전용
  - useEntityByIdQuery() - 단일 조회 전용

## 📝 **코드 생성 패턴**
- **Swagger 기반**: API 스키마 자동 동기화
- **Template 기반**: 일관된 코드 구조
- **ValidationSchema**: Zod-based validation with business rules
"#;

const TEMPLATES: &str = r#"# 📋 Primes 템플릿 시스템

## 🎯 **SinglePage 템플릿**
- **용도**: 단일 페이지 CRUD 작업
- **구조**: Modal-based CRUD with DatatableComponent
- **특징**:
  - 검색, 필터링, 정렬 기능
  - Modal을 통한 생성/수정/삭제
  - 페이지네이션 지원

## 🔗 **MasterDetailPage 템플릿**
- **용도**: 마스터-디테일 관계 CRUD
- **구조**: Navigation-based CRUD with relationships
- **특징**:
  - 좌측: 마스터 리스트
  - 우측: 선택된 항목의 상세 정보
  - 관계형 데이터 처리

## 📑 **TabNavigation 템플릿**
- **용도**: 탭 기반 네비게이션
- **구조**: Tab-based navigation structure
- **특징**:
  - 여러 탭으로 정보 분류
  - 각 탭별 독립적인 CRUD
  - 상태 공유 및 동기화

## 🎨 **CustomSelect 템플릿**
- **용도**: Field API 연동 선택 컴포넌트
- **구조**: Field API integrated select components
- **특징**:
  - 동적 옵션 로딩
  - 검색 및 필터링
  - 다중 선택 지원
"#;

const DOMAINS: &str = r#"# 🌐 Primes 솔루션 도메인

## 🏢 **ini (기본 정보)**
- **거래처 관리**: Vendor, Customer
- **품목 관리**: Item, Category
- **코드 관리**: Code, CodeGroup
- **사용자 관리**: User, Role

## 💰 **sales (판매 관리)**
- **견적 관리**: Quote, QuoteItem
- **주문 관리**: Order, OrderItem
- **출하 관리**: Shipment, ShipmentItem
- **매출 관리**: Revenue, Invoice

## 🛒 **purchase (구매 관리)**
- **견적 요청**: RFQ, RFQItem
- **구매 주문**: PO, POItem
- **입고 관리**: Receipt, ReceiptItem
- **지급 관리**: Payment, PaymentItem

## 🏭 **production (생산 관리)**
- **생산 계획**: Plan, PlanItem
- **작업 지시**: WorkOrder, WorkOrderItem
- **생산 실적**: Performance, PerformanceItem
- **자재 소요**: Material, MaterialItem

## ⚙️ **machine (설비 관리)**
- **설비 정보**: Machine, MachineType
- **점검 관리**: Inspection, InspectionItem
- **수리 관리**: Repair, RepairItem
- **이력 관리**: History, HistoryItem

## 🎯 **mold (금형 관리)**
- **금형 정보**: Mold, MoldType
- **사용 이력**: Usage, UsageItem
- **보관 관리**: Storage, StorageItem
- **수명 관리**: Lifecycle, LifecycleItem

## ✅ **quality (품질 관리)**
- **검사 기준**: Standard, StandardItem
- **검사 결과**: Result, ResultItem
- **불량 관리**: Defect, DefectItem
- **개선 관리**: Improvement, ImprovementItem
"#;

const SWAGGER: &str = r#"# 🔍 Primes Swagger API 정보

## 📊 **실제 Swagger URL들**

### **🏭 Production (생산 관리)**
- **URL**: {{primes_production}}
- **용도**: 생산 계획, 작업 지시, 생산 실적 관리
- **주요 API**: Plan, WorkOrder, Performance, Material

### **💰 Sales (판매 관리)**
- **URL**: {{primes_sales}}
- **용도**: 견적, 주문, 출하, 매출 관리
- **주요 API**: Quote, Order, Shipment, Revenue, Invoice

### **🛒 Purchase (구매 관리)**
- **URL**: {{primes_purchase}}
- **용도**: 견적 요청, 구매 주문, 입고, 지급 관리
- **주요 API**: RFQ, PO, Receipt, Payment

### **📦 Inventory (재고 관리)**
- **URL**: {{primes_inventory}}
- **용도**: 재고 수준, 입출고, 재고 이동 관리
- **주요 API**: Stock, Movement, Transfer, Adjustment

### **⚙️ Machine (설비 관리)**
- **URL**: {{primes_machine}}
- **용도**: 설비 정보, 점검, 수리, 이력 관리
- **주요 API**: Machine, Inspection, Repair, History

### **🎯 Mold (금형 관리)**
- **URL**: {{primes_mold}}
- **용도**: 금형 정보, 사용 이력, 보관, 수명 관리
- **주요 API**: Mold, Usage, Storage, Lifecycle

### **🏢 INI (기본 정보)**
- **URL**: {{primes_ini}}
- **용도**: 거래처, 품목, 코드, 사용자 관리
- **주요 API**: Vendor, Customer, Item, Category, Code, User

## 🚀 **사용법**

### **1. 환경변수 설정**
```bash
export SWAGGER_URL_PRODUCTION={{primes_production}}
export SWAGGER_URL_SALES={{primes_sales}}
export SWAGGER_URL_PURCHASE={{primes_purchase}}
export SWAGGER_URL_INVENTORY={{primes_inventory}}
export SWAGGER_URL_MACHINE={{primes_machine}}
export SWAGGER_URL_MOLD={{primes_mold}}
export SWAGGER_URL_INI={{primes_ini}}
```

### **2. 직접 API 호출**
```bash
# Production API 스키마 확인
curl {{primes_production}}

# Sales API 스키마 확인
curl {{primes_sales}}

# Purchase API 스키마 확인
curl {{primes_purchase}}
```

### **3. 코드 생성 시 활용**
- **Swagger 분석**: 각 도메인별 API 스키마 자동 분석
- **타입 생성**: API 응답 구조 기반 TypeScript 타입 자동 생성
- **서비스 생성**: API 엔드포인트 기반 서비스 레이어 자동 생성
- **검증 스키마**: API 요청/응답 기반 Zod 검증 스키마 자동 생성
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primes_topics() {
        let topics: Vec<_> = PrimesDocs::topics().iter().map(|t| t.topic).collect();
        assert_eq!(
            topics,
            vec!["overview", "patterns", "templates", "domains", "swagger"]
        );
    }

    #[test]
    fn test_swagger_template_references_every_primes_url() {
        for key in [
            "primes_production",
            "primes_sales",
            "primes_purchase",
            "primes_inventory",
            "primes_machine",
            "primes_mold",
            "primes_ini",
        ] {
            assert!(SWAGGER.contains(&format!("{{{{{}}}}}", key)), "missing {}", key);
        }
    }
}
