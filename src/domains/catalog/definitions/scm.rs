//! SCM (supply chain management) documentation.

use super::{NamespaceDefinition, TopicDefinition};
use crate::domains::catalog::identifier::Namespace;

/// SCM namespace definition.
pub struct ScmDocs;

impl NamespaceDefinition for ScmDocs {
    const NAMESPACE: Namespace = Namespace::Scm;
    const NOT_FOUND: &'static str = "SCM 프로젝트 정보를 찾을 수 없습니다.";

    fn topics() -> Vec<TopicDefinition> {
        vec![TopicDefinition {
            topic: "overview",
            title: "SCM 프로젝트 개요",
            description: "공급망 관리 시스템 - Radix UI + Tailwind",
            tool_name: "get_scm_overview",
            template: OVERVIEW,
        }]
    }
}

const OVERVIEW: &str = r#"# 📦 SCM 프로젝트 개요

## 📋 **프로젝트 설명**
SCM은 공급망 관리 시스템으로, 공급업체부터 고객까지의 전체 공급망을 효율적으로 관리하고 최적화하는 웹 애플리케이션입니다.

## 🏗️ **기술 스택**
- **Frontend**: React 18.3.1 + TypeScript 5.7.2
- **UI Framework**: Radix UI + Tailwind CSS
- **State Management**: React Query + React Table
- **Charts**: ECharts (공급망 시각화)
- **Build Tool**: Vite 6.2.0
- **Package Manager**: pnpm

## 📊 **현재 상태**
- **완성도**: 🟠 40%
- **개발 단계**: 초기 개발 단계
- **주요 기능**: 공급업체 관리, 재고 관리, 물류 관리
- **특화 영역**: 공급망 최적화 및 리스크 관리

## 🎯 **주요 특징**
- **공급업체 관리**: 공급업체 정보 및 성과 관리
- **재고 관리**: 실시간 재고 추적 및 최적화
- **물류 관리**: 운송, 배송, 창고 관리
- **공급망 시각화**: 네트워크 맵 및 분석 도구

## 🔗 **핵심 모듈**
- **Supplier Management**: 공급업체 등록, 평가, 성과 관리
- **Inventory Management**: 재고 수준, 주문점, 안전재고
- **Logistics Management**: 운송 계획, 배송 추적, 창고 관리
- **Demand Planning**: 수요 예측, 계획 수립, 실행 관리
- **Risk Management**: 공급망 리스크 식별 및 대응
"#;
