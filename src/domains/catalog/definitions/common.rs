//! Cross-project documentation: Swagger summary, shared packages, comparison.

use super::{NamespaceDefinition, TopicDefinition};
use crate::domains::catalog::identifier::Namespace;

/// Common namespace definition.
pub struct CommonDocs;

impl NamespaceDefinition for CommonDocs {
    const NAMESPACE: Namespace = Namespace::Common;
    const NOT_FOUND: &'static str = "공통 정보를 찾을 수 없습니다.";

    fn topics() -> Vec<TopicDefinition> {
        vec![
            TopicDefinition {
                topic: "swagger",
                title: "Swagger 정보",
                description: "API 스키마 및 Swagger 관련 정보",
                tool_name: "get_common_swagger",
                template: SWAGGER,
            },
            TopicDefinition {
                topic: "packages",
                title: "공통 패키지",
                description: "공유 컴포넌트 및 유틸리티",
                tool_name: "get_common_packages",
                template: PACKAGES,
            },
            TopicDefinition {
                topic: "comparison",
                title: "프로젝트 비교",
                description: "각 프로젝트의 기술 스택 및 특징 비교",
                tool_name: "get_project_comparison",
                template: COMPARISON,
            },
        ]
    }
}

const SWAGGER: &str = r#"# 🔍 Swagger 정보

## 📊 **현재 상태**
- **동적 발견**: 환경변수 기반 Swagger URL 자동 탐지
- **프로젝트별 분리**: SWAGGER_[PROJECT]_[MODULE] 패턴
- **자동 동기화**: API 스키마 변경사항 자동 반영

## 🚀 **사용법**

### **1. 환경변수 설정**
```bash
# ESG 프로젝트
export SWAGGER_URL_ESG={{esg}}

# Primes 프로젝트
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
# ESG API 스키마 확인
curl {{esg}}

# Primes Production API 스키마 확인
curl {{primes_production}}

# Primes Sales API 스키마 확인
curl {{primes_sales}}
```

### **3. 로컬 파일 읽기**
- swagger_data/ 디렉토리의 분석 결과 활용

## 📋 **프로젝트별 지원**

### **🌱 ESG 프로젝트**
- **URL**: {{esg}}
- **모듈**: ESG 데이터 수집, 분석, 리포트
- **프레임워크**: GRI, SASB, TCFD, CDP 준수

### **🎯 Primes 프로젝트**
- **Production**: {{primes_production}} - 생산 관리
- **Sales**: {{primes_sales}} - 판매 관리
- **Purchase**: {{primes_purchase}} - 구매 관리
- **Inventory**: {{primes_inventory}} - 재고 관리
- **Machine**: {{primes_machine}} - 설비 관리
- **Mold**: {{primes_mold}} - 금형 관리
- **INI**: {{primes_ini}} - 기본 정보

### **🤖 AIPS 프로젝트**
- **AI 모듈**: 머신러닝, 자연어 처리, 컴퓨터 비전
- **분석 도구**: 예측 분석, 패턴 인식, 인사이트 생성

### **📦 SCM 프로젝트**
- **공급망 모듈**: 공급업체, 재고, 물류, 수요 계획, 리스크 관리
"#;

const PACKAGES: &str = r#"# 📦 공통 패키지

## 🎨 **UI 컴포넌트**
- **@repo/radix-ui**: Radix UI 기반 컴포넌트 (Primes, AIPS, SCM)
- **@repo/falcon-ui**: Bootstrap 기반 컴포넌트 (ESG)
- **@repo/moornmo-ui**: Material-UI 기반 컴포넌트
- **@repo/ui**: 공통 UI 컴포넌트

## 📊 **차트 및 시각화**
- **@repo/echart**: ECharts 기반 차트 컴포넌트
- **@repo/gantt-charts**: 간트 차트 컴포넌트
- **@repo/react-flow**: 플로우 차트 컴포넌트

## 🛠️ **도구 및 유틸리티**
- **@repo/utils**: 공통 유틸리티 함수
- **@repo/typescript-config**: TypeScript 설정
- **@repo/eslint-config**: ESLint 설정
- **@repo/i18n**: 다국어 지원

## 📝 **편집기 및 입력**
- **@repo/editor-js**: 블록 기반 에디터
- **@repo/flora-editor**: 리치 텍스트 에디터
- **@repo/swiper**: 슬라이더 및 캐러셀
"#;

const COMPARISON: &str = r#"# 🔄 프로젝트별 특징 비교

## 🎯 **Primes (ERP 시스템)**
- **완성도**: 🟢 98%
- **UI**: Radix UI + Tailwind CSS
- **특징**: 7개 솔루션 도메인, 260개 페이지, 422개 Hook
- **용도**: 기업 전반의 업무 프로세스 관리
- **Swagger**: 7개 도메인별 API (orcamaas.com)

## 🌱 **ESG (지속가능성 관리)**
- **완성도**: 🟡 85%
- **UI**: Falcon UI + Bootstrap + Material-UI
- **특징**: 대시보드 중심, 차트 위젯, KPI 카드
- **용도**: ESG 데이터 수집, 분석, 리포트
- **Swagger**: ESG 통합 API (esg.primes-cloud.co.kr)

## 🤖 **AIPS (AI 생산성 시스템)**
- **완성도**: 🟡 70%
- **UI**: Radix UI + Tailwind CSS
- **특징**: AI 통합, 정보 처리, 생산성 도구
- **용도**: AI 기반 분석 및 생산성 향상
- **Swagger**: AI 모듈별 API (개발 중)

## 📦 **SCM (공급망 관리)**
- **완성도**: 🟠 40%
- **UI**: Radix UI + Tailwind CSS
- **특징**: 공급업체 관리, 재고 관리, 물류 관리
- **용도**: 공급망 최적화 및 관리
- **Swagger**: 공급망 모듈별 API (개발 중)

## 🔗 **공통점**
- **Frontend**: React 18 + TypeScript
- **State Management**: React Query
- **Build Tool**: Vite
- **Package Manager**: pnpm
- **Monorepo**: Turborepo 기반 구조
"#;
